//! Literal content of the generated files
//!
//! Templates are fixed text with plain string interpolation, nothing more.
//! Operator-supplied values are inserted verbatim; the generated formats do
//! no escaping, so a database name containing YAML syntax ends up in the
//! file as typed. That matches the upstream scaffold and is documented as a
//! known quirk rather than silently corrected here.

/// Gem manifest shared by every generated app. `gem` lines for optional
/// features are appended by [`gemfile`].
pub const GEMFILE_BASE: &str = r#"
source "https://rubygems.org"

gem "rails", "4.2.0"
gem 'turbolinks'
gem 'uglifier'
gem "pg"

gem "sass", "~> 3.4.9"
gem "sass-rails"
gem "bourbon"
gem 'neat'
gem "jquery-rails"
gem "coffee-rails"

gem "puma"

group :development do
  gem "foreman", require: false
  gem "spring"
  gem "quiet_assets"
  gem "better_errors"
  gem 'annotate', require: false
  gem 'byebug'
end

group :development, :test do
  gem "factory_girl_rails"
  gem "rspec-rails", "~> 3.1.0"
  gem "dotenv-rails"
end

group :test do
  gem "shoulda-matchers", "~> 2.7.0", require: false
  gem "timecop"
  gem "database_cleaner"
end

group :production, :staging do
  gem "rails_12factor"
  gem 'therubyracer'
  gem "skylight"
end
"#;

/// Render the Gemfile for the chosen feature set.
pub fn gemfile(use_ember: bool, use_auth: bool) -> String {
    let mut manifest = GEMFILE_BASE.to_string();
    if use_ember {
        manifest.push_str("gem \"active_model_serializers\"\n");
        manifest.push_str("gem 'ember-rails'\n");
        manifest.push_str("gem 'ember-source', '~> 1.9.0'\n");
    }
    if use_auth {
        manifest.push_str("gem \"devise\"\n");
    }
    manifest
}

/// Sprockets entry point used when the Ember shell is not wanted.
pub const APPLICATION_JS_COFFEE: &str = "  #= require jquery
  #= require jquery_ujs
  #= require self
";

/// Static landing template shown by a fresh Ember app.
pub const INDEX_HANDLEBARS: &str = r#"  <div style="width: 600px; border: 6px solid #eee; margin: 0 auto; padding: 20px; text-align: center; font-family: sans-serif;">
    <img src="http://emberjs.com/images/about/ember-productivity-sm.png" style="display: block; margin: 0 auto;">
    <h1>Welcome to Ember.js!</h1>
    <p>You're running an Ember.js app on top of Ruby on Rails. To get started, replace this content
    (inside <code>app/assets/javascripts/templates/index.js.handlebars</code>) with your application's
    HTML.</p>
  </div>
"#;

/// HTML shell served by the assets controller when Ember is enabled.
pub fn index_erb(app_title: &str) -> String {
    format!(
        r#"  <!DOCTYPE html>
  <html>
  <head>
    <title>{app_title}</title>
    <%= stylesheet_link_tag    "application", :media => "all" %>
    <%= csrf_meta_tags %>
  </head>
  <body>
    <%= javascript_include_tag "application" %>
  </body>
  </html>
"#
    )
}

/// Embed-ids configuration injected into the generated serializer.
pub const SERIALIZER_EMBED_LINE: &str = "  embed :ids, :include => true\n";

/// Anchor line of the generated application serializer.
pub const SERIALIZER_CLASS_ANCHOR: &str = "class ApplicationSerializer < ActiveModel::Serializer";

/// Root route pointing at the assets controller, inserted into routes.rb.
pub const ROOT_ROUTE_LINE: &str = "  root :to => 'assets#index'\n";

/// Anchor line of a fresh config/routes.rb.
pub const ROUTES_DRAW_ANCHOR: &str = "Rails.application.routes.draw do";

/// Shoulda matchers require, inserted into the generated rails helper.
pub const SHOULDA_REQUIRE_LINE: &str = "require 'shoulda/matchers'\n";

/// Anchor line written by `rails generate rspec:install`.
pub const RSPEC_RAILS_ANCHOR: &str = "require 'rspec/rails'";

/// Database cleaner hooks for the generated spec suite.
pub const DATABASE_CLEANER: &str = r#"RSpec.configure do |config|
  config.before(:suite) do
    DatabaseCleaner.clean_with(:truncation)
  end

  config.before(:each) do
    DatabaseCleaner.strategy = :transaction
  end

  config.before(:each, js: true) do
    DatabaseCleaner.strategy = :truncation
  end

  config.before(:each) do
    DatabaseCleaner.start
  end

  config.after(:each) do
    DatabaseCleaner.clean
  end
end
"#;

pub const VARIABLES_SCSS: &str = "// Put reusable variables here e.g. standard colours\n";

pub const APPLICATION_SCSS: &str = r#"@import "bourbon";
@import "neat";
@import "variables";
"#;

/// Environment file; written to both `.env` and `.env.example`, each with its
/// own freshly generated secret.
pub fn env_file(database_name: &str, test_database_name: &str, secret_key_base: &str) -> String {
    format!(
        "SECRET_KEY_BASE={secret_key_base}\n\
         DATABASE_HOST=localhost\n\
         DATABASE_POOL_SIZE=5\n\
         DATABASE_NAME={database_name}\n\
         TEST_DATABASE_NAME={test_database_name}\n"
    )
}

pub const SECRETS_YML: &str = r#"# http://guides.rubyonrails.org/4_1_release_notes.html#config-secrets-yml
development: &default
  secret_key_base: <%= ENV["SECRET_KEY_BASE"] %>
test:
  <<: *default
"#;

pub const DATABASE_YML: &str = r#"default: &default
  adapter: postgresql
  encoding: utf8
  host: <%= ENV["DATABASE_HOST"] %>
  pool: <%= ENV["DATABASE_POOL_SIZE"] %>
  database: <%= ENV["DATABASE_NAME"] %>

development:
  <<: *default

test:
  <<: *default
  database: <%= ENV["TEST_DATABASE_NAME"] %>

production:
  <<: *default
  username: <%= ENV["DATABASE_USERNAME"] %>
  password: <%= ENV["DATABASE_PASSWORD"] %>
"#;

pub const PROCFILE: &str = "web: spring rails server\n";

/// Line-wise pattern matching the secret key setting in the generated
/// Devise initializer, commented or not.
pub const DEVISE_SECRET_KEY_PATTERN: &str = r".*config\.secret_key.*";

/// Replacement for the Devise secret key line, carrying a fresh fallback.
pub fn devise_secret_key_line(secret: &str) -> String {
    format!(
        "  config.secret_key = Rails.application.secrets.secret_key_base || '{secret}'"
    )
}

pub const DOCKERFILE: &str = r#"FROM ruby:2.1.5
MAINTAINER AddJam

ENV RAILS_ENV production

# Ruby
RUN gem install bundler --no-ri --no-rdoc

# Add gemfile before others for better caching
WORKDIR /var/www
ADD Gemfile Gemfile
ADD Gemfile.lock Gemfile.lock
RUN bundle install

# Code
ADD . /var/www
RUN bundle exec rake assets:clean assets:precompile

# Env
EXPOSE 3000
CMD bundle exec puma -p 3000 -e production
"#;

/// Multi-container orchestration file: web app, postgres with a data
/// container, and an nginx proxy keyed off VIRTUAL_HOST.
pub fn fig_yml(image_tag: &str, secret_key_base: &str, devise_key: &str, domain: &str) -> String {
    format!(
        r#"web:
  image: {image_tag}:latest
  links:
    - "db:db"
  ports:
    - "3000:3000"
  volumes:
    - "./log:/var/www/log"
  environment:
    - "SECRET_KEY_BASE={secret_key_base}"
    - "DEVISE_KEY={devise_key}"
    - "VIRTUAL_HOST={domain}"
pgdata:
  image: busybox
  volumes:
    - /var/lib/postgresql/data
db:
  image: postgres
  volumes_from:
    - pgdata
  environment:
    - "LC_ALL=C.UTF-8"
nginx:
  image: jwilder/nginx-proxy:latest
  ports:
    - "80:80"
  volumes:
    - /var/run:/tmp
"#
    )
}

/// "my_app" / "my-app" -> "My App", for the generated page title.
pub fn titleize(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
