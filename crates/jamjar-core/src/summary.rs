//! The "what next" report printed after a successful run

use crate::answers::Answers;

/// Follow-up steps for the operator, conditioned on the chosen features.
/// Pure output; nothing here touches the project tree.
pub fn whats_next(answers: &Answers) -> Vec<String> {
    let mut steps = vec![
        "Copy .env.example to .env and change the environment variables".to_string(),
        "Setup skylight: $ bundle exec skylight setup skylight-key-here \
         (https://www.skylight.io/app/setup)"
            .to_string(),
        "Run without docker: $ foreman start".to_string(),
    ];

    if answers.use_docker {
        steps.push("Run with docker (you'll need fig installed): $ fig up".to_string());
        steps.push("Set MAINTAINER in the Dockerfile".to_string());
    }

    if answers.use_auth {
        steps.push(
            "Look at the devise setup instructions (scroll up to the generator output)"
                .to_string(),
        );
    }

    steps
}
