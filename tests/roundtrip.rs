use std::collections::HashMap;

use sidekick::template::TemplateValue;
use sidekick::{commandline, path, shell, slug, template, url};

#[test]
fn quoted_command_line_retokenizes_to_original_args() {
    let args = vec![
        "post".to_string(),
        "create".to_string(),
        "--post_title=Hello World".to_string(),
        "--porcelain".to_string(),
    ];

    let line = shell::join_quoted(&args);
    assert_eq!(line, "post create '--post_title=Hello World' --porcelain");

    let rebuilt = commandline::build(line);
    assert_eq!(rebuilt, args);
}

#[test]
fn bare_words_pass_through_quoting_and_retokenizing() {
    let args = vec!["core".to_string(), "version".to_string()];
    assert_eq!(commandline::build(shell::join_quoted(&args)), args);
}

#[test]
fn slug_is_a_fixed_point_over_messy_corpus() {
    for input in [
        "The Quick Brown Fox",
        "élan__VITAL--2024",
        "snake_case_and CamelCase mixed!",
        "...",
        "v2.0.1 (beta)",
    ] {
        let once = slug::slug(input);
        assert_eq!(slug::slug(&once), once);
    }
}

#[test]
fn template_feeds_slug_and_path_helpers() {
    let mut vars: HashMap<String, TemplateValue> = HashMap::new();
    vars.insert(
        "dir".to_string(),
        TemplateValue::from(path::join(&["/var/www/", "sites"])),
    );
    vars.insert(
        "id".to_string(),
        TemplateValue::deferred(|args: &[String]| slug::slug(&args.join(" "))),
    );

    let rendered = template::render(
        "{{dir}}/{{id}}",
        &vars,
        &["My New".to_string(), "Site".to_string()],
    )
    .unwrap();

    assert_eq!(rendered, "/var/www/sites/my-new-site");
}

#[test]
fn url_defaults_compose_with_validation() {
    let parts = url::parse("nope");
    let checked = sidekick::validation::ensure(
        parts.port != 0,
        "port",
        "URL must carry an explicit port",
    );
    assert!(checked.is_err());

    let parts = url::parse("ssh://deploy@build.example.com:2222/srv");
    assert!(sidekick::validation::ensure(parts.port != 0, "port", "msg").is_ok());
    assert_eq!(parts.username, "deploy");
}
