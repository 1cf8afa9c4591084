//! Plan resolution: answers in, ordered directives out
//!
//! This is a pure function of the answers and the secret stream. Ordering
//! matters where a later directive edits a file an earlier command
//! generates (the serializer, the rspec helper, the Devise initializer),
//! and the version-control commands always come last so the initial commit
//! captures the finished tree.

use crate::answers::Answers;
use crate::plan::directive::Directive;
use crate::plan::secrets::SecretSource;
use crate::plan::templates;

/// Resolve the full ordered plan for one scaffolding run.
///
/// `app_name` is the application directory name; it only feeds the page
/// title of the Ember HTML shell.
pub fn resolve(
    answers: &Answers,
    app_name: &str,
    secrets: &mut impl SecretSource,
) -> Vec<Directive> {
    let mut plan = Vec::new();

    // Gem manifest first; everything else assumes the bundle below it.
    plan.push(Directive::overwrite(
        "Gemfile",
        templates::gemfile(answers.use_ember, answers.use_auth),
    ));

    if !answers.use_ember {
        plan.push(Directive::remove("app/assets/javascripts/application.js"));
        plan.push(Directive::overwrite(
            "app/assets/javascripts/application.js.coffee",
            templates::APPLICATION_JS_COFFEE,
        ));
    }

    plan.push(Directive::command(["bundle", "install"]));

    if answers.use_ember {
        plan.push(Directive::remove("app/assets/javascripts/application.js"));

        // Default serializer compatible with ember-data
        plan.push(Directive::command([
            "bundle",
            "exec",
            "rails",
            "generate",
            "serializer",
            "application",
            "--parent",
            "ActiveModel::Serializer",
        ]));
        plan.push(Directive::insert_after(
            "app/serializers/application_serializer.rb",
            templates::SERIALIZER_CLASS_ANCHOR,
            templates::SERIALIZER_EMBED_LINE,
        ));

        plan.push(Directive::command([
            "bundle",
            "exec",
            "rails",
            "generate",
            "ember:bootstrap",
            "-g",
            "--javascript-engine",
            "coffee",
        ]));
        plan.push(Directive::command(["bundle", "exec", "rake", "tmp:clear"]));

        plan.push(Directive::overwrite(
            "app/assets/javascripts/templates/index.js.handlebars",
            templates::INDEX_HANDLEBARS,
        ));

        // Serve Ember and app assets from an AssetsController
        plan.push(Directive::command([
            "bundle",
            "exec",
            "rails",
            "generate",
            "controller",
            "Assets",
            "index",
        ]));
        plan.push(Directive::overwrite(
            "app/views/assets/index.html.erb",
            templates::index_erb(&templates::titleize(app_name)),
        ));
        plan.push(Directive::remove("app/views/layouts"));
        plan.push(Directive::insert_after(
            "config/routes.rb",
            templates::ROUTES_DRAW_ANCHOR,
            templates::ROOT_ROUTE_LINE,
        ));
    }

    // Rspec replaces the default test scaffolding
    plan.push(Directive::command([
        "bundle",
        "exec",
        "rails",
        "generate",
        "rspec:install",
    ]));
    plan.push(Directive::remove("test"));
    plan.push(Directive::insert_after(
        "spec/rails_helper.rb",
        templates::RSPEC_RAILS_ANCHOR,
        templates::SHOULDA_REQUIRE_LINE,
    ));
    plan.push(Directive::overwrite(
        "spec/support/database_cleaner.rb",
        templates::DATABASE_CLEANER,
    ));

    plan.push(Directive::remove("app/assets/stylesheets/application.css"));
    plan.push(Directive::overwrite(
        "app/assets/stylesheets/_variables.scss",
        templates::VARIABLES_SCSS,
    ));
    plan.push(Directive::overwrite(
        "app/assets/stylesheets/application.scss",
        templates::APPLICATION_SCSS,
    ));

    let test_database_name = answers.test_database_name();
    plan.push(Directive::overwrite(
        ".env.example",
        templates::env_file(
            &answers.database_name,
            &test_database_name,
            &secrets.hex_secret(),
        ),
    ));
    plan.push(Directive::overwrite(
        ".env",
        templates::env_file(
            &answers.database_name,
            &test_database_name,
            &secrets.hex_secret(),
        ),
    ));
    plan.push(Directive::append(".gitignore", "/.env\n"));

    plan.push(Directive::overwrite("config/secrets.yml", templates::SECRETS_YML));
    plan.push(Directive::overwrite("config/database.yml", templates::DATABASE_YML));

    // Dropping a database that does not exist yet is fine
    plan.push(Directive::tolerant_command([
        "bundle", "exec", "rake", "db:drop",
    ]));
    plan.push(Directive::command(["bundle", "exec", "rake", "db:create"]));

    plan.push(Directive::overwrite("Procfile", templates::PROCFILE));

    if answers.use_auth {
        plan.push(Directive::command([
            "bundle",
            "exec",
            "rails",
            "generate",
            "devise:install",
        ]));
        plan.push(Directive::command([
            "bundle", "exec", "rails", "generate", "devise", "User",
        ]));
        plan.push(Directive::substitute(
            "config/initializers/devise.rb",
            templates::DEVISE_SECRET_KEY_PATTERN,
            templates::devise_secret_key_line(&secrets.hex_secret()),
        ));
    }

    plan.push(Directive::command(["bundle", "exec", "rake", "db:migrate"]));

    if answers.use_docker {
        let domain = answers.docker_domain.as_deref().unwrap_or_default();
        let tag = answers.docker_tag.as_deref().unwrap_or_default();
        plan.push(Directive::overwrite("Dockerfile", templates::DOCKERFILE));
        plan.push(Directive::overwrite(
            "fig.yml",
            templates::fig_yml(tag, &secrets.hex_secret(), &secrets.hex_secret(), domain),
        ));
        let image = format!("{tag}:latest");
        plan.push(Directive::command([
            "docker",
            "build",
            "-t",
            image.as_str(),
            ".",
        ]));
    }

    plan.push(Directive::command(["git", "init"]));
    plan.push(Directive::command(["git", "add", "."]));
    plan.push(Directive::command(["git", "commit", "-m", "Initial commit"]));

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Answers;
    use crate::plan::directive::FileMode;
    use crate::plan::secrets::{OsSecretSource, StubSecretSource};
    use std::collections::HashSet;

    fn plain_answers() -> Answers {
        Answers::new("jam", false, false, false, None, None)
    }

    fn file_paths(plan: &[Directive]) -> Vec<&str> {
        plan.iter()
            .filter_map(|d| d.as_file())
            .map(|f| f.path.as_str())
            .collect()
    }

    fn command_lines(plan: &[Directive]) -> Vec<String> {
        plan.iter()
            .filter_map(|d| d.as_command())
            .map(|c| c.display())
            .collect()
    }

    fn file_content<'a>(plan: &'a [Directive], path: &str) -> &'a str {
        plan.iter()
            .filter_map(|d| d.as_file())
            .find(|f| f.path == path)
            .unwrap_or_else(|| panic!("no directive for {path}"))
            .content
            .as_str()
    }

    #[test]
    fn resolution_is_deterministic_with_seeded_secrets() {
        let answers = Answers::new("jam", true, true, true, None, None);
        let a = resolve(&answers, "jam_jar", &mut StubSecretSource::default());
        let b = resolve(&answers, "jam_jar", &mut StubSecretSource::default());
        assert_eq!(a, b);
    }

    #[test]
    fn plain_run_has_exact_command_sequence() {
        let plan = resolve(&plain_answers(), "jam_jar", &mut StubSecretSource::default());
        assert_eq!(
            command_lines(&plan),
            vec![
                "bundle install",
                "bundle exec rails generate rspec:install",
                "bundle exec rake db:drop",
                "bundle exec rake db:create",
                "bundle exec rake db:migrate",
                "git init",
                "git add .",
                "git commit -m Initial commit",
            ]
        );
    }

    #[test]
    fn plain_run_excludes_feature_files() {
        let plan = resolve(&plain_answers(), "jam_jar", &mut StubSecretSource::default());
        let paths = file_paths(&plan);
        assert!(!paths.contains(&"Dockerfile"));
        assert!(!paths.contains(&"fig.yml"));
        assert!(!paths.contains(&"config/routes.rb"));
        assert!(!paths.contains(&"app/serializers/application_serializer.rb"));
        assert!(!paths.contains(&"config/initializers/devise.rb"));
        // The plain sprockets entry point replaces the default one
        assert!(paths.contains(&"app/assets/javascripts/application.js.coffee"));
    }

    #[test]
    fn ember_run_swaps_entry_point_and_rewrites_root_route() {
        let answers = Answers::new("jam", true, false, false, None, None);
        let plan = resolve(&answers, "jam_jar", &mut StubSecretSource::default());
        let paths = file_paths(&plan);
        assert!(!paths.contains(&"app/assets/javascripts/application.js.coffee"));
        assert!(paths.contains(&"app/assets/javascripts/templates/index.js.handlebars"));
        assert!(paths.contains(&"app/views/layouts"));
        assert!(paths.contains(&"config/routes.rb"));

        let shell = file_content(&plan, "app/views/assets/index.html.erb");
        assert!(shell.contains("<title>Jam Jar</title>"));

        let commands = command_lines(&plan);
        assert!(commands
            .iter()
            .any(|c| c.contains("generate serializer application")));
        assert!(commands.iter().any(|c| c.contains("ember:bootstrap")));
    }

    #[test]
    fn db_reset_pair_precedes_migrate_and_only_drop_is_tolerant() {
        let plan = resolve(&plain_answers(), "jam_jar", &mut StubSecretSource::default());
        let commands: Vec<_> = plan.iter().filter_map(|d| d.as_command()).collect();
        let drop = commands
            .iter()
            .position(|c| c.display().ends_with("db:drop"))
            .unwrap();
        let create = commands
            .iter()
            .position(|c| c.display().ends_with("db:create"))
            .unwrap();
        let migrate = commands
            .iter()
            .position(|c| c.display().ends_with("db:migrate"))
            .unwrap();
        assert!(drop < create && create < migrate);
        assert!(commands[drop].may_fail);
        assert!(!commands[create].may_fail);
        assert!(!commands[migrate].may_fail);
    }

    #[test]
    fn auth_run_patches_devise_initializer_after_generators() {
        let answers = Answers::new("jam", false, true, false, None, None);
        let plan = resolve(&answers, "jam_jar", &mut StubSecretSource::default());

        let generate = plan
            .iter()
            .position(|d| {
                d.as_command()
                    .is_some_and(|c| c.display().ends_with("generate devise:install"))
            })
            .unwrap();
        let patch = plan
            .iter()
            .position(|d| {
                d.as_file()
                    .is_some_and(|f| f.path == "config/initializers/devise.rb")
            })
            .unwrap();
        assert!(generate < patch);

        let directive = plan[patch].as_file().unwrap();
        match &directive.mode {
            FileMode::Substitute { pattern } => {
                assert_eq!(pattern, templates::DEVISE_SECRET_KEY_PATTERN)
            }
            other => panic!("unexpected mode: {other:?}"),
        }
        assert!(directive
            .content
            .starts_with("  config.secret_key = Rails.application.secrets.secret_key_base"));
    }

    #[test]
    fn docker_run_with_empty_inputs_uses_documented_defaults() {
        let answers = Answers::new("jam", false, false, true, Some(String::new()), None);
        let plan = resolve(&answers, "jam_jar", &mut StubSecretSource::default());

        let fig = file_content(&plan, "fig.yml");
        assert!(fig.contains("VIRTUAL_HOST=example.com"));
        assert!(fig.contains("image: addjam/web:latest"));

        let commands = command_lines(&plan);
        assert!(commands.contains(&"docker build -t addjam/web:latest .".to_string()));
    }

    #[test]
    fn git_commands_come_last() {
        let answers = Answers::new("jam", true, true, true, None, None);
        let plan = resolve(&answers, "jam_jar", &mut StubSecretSource::default());
        let commands = command_lines(&plan);
        assert_eq!(
            &commands[commands.len() - 3..],
            &["git init", "git add .", "git commit -m Initial commit"]
        );
        // Nothing at all after the commit
        assert!(plan
            .last()
            .and_then(|d| d.as_command())
            .is_some_and(|c| c.display() == "git commit -m Initial commit"));
    }

    #[test]
    fn env_files_get_independent_secrets() {
        let answers = Answers::new("jam", false, true, true, None, None);
        let plan = resolve(&answers, "jam_jar", &mut StubSecretSource::default());
        let env = file_content(&plan, ".env");
        let example = file_content(&plan, ".env.example");
        assert_ne!(env, example);

        let key = |content: &str| {
            content
                .lines()
                .find(|l| l.starts_with("SECRET_KEY_BASE="))
                .unwrap()
                .to_string()
        };
        assert_ne!(key(env), key(example));
    }

    #[test]
    fn all_secrets_in_a_full_plan_are_pairwise_distinct() {
        let answers = Answers::new("jam", false, true, true, None, None);
        let plan = resolve(&answers, "jam_jar", &mut OsSecretSource);

        // Collect every 64-char hex run from generated content
        let mut seen = HashSet::new();
        let mut total = 0;
        for f in plan.iter().filter_map(|d| d.as_file()) {
            for token in f.content.split(|c: char| !c.is_ascii_hexdigit()) {
                if token.len() == 64 {
                    total += 1;
                    seen.insert(token.to_string());
                }
            }
        }
        // .env, .env.example, devise.rb, fig.yml x2
        assert_eq!(total, 5);
        assert_eq!(seen.len(), total);
    }
}
