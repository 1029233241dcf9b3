use crate::config::ResolvedConfig;
use crate::domain::model::PackageName;

pub const NO_DEPENDENCIES: &str = "no direct dependencies";

pub fn render_configuration(config: &ResolvedConfig) -> String {
    format!(
        "Parameters:\n\
         package: {}\n\
         repo: {}\n\
         mode: {}\n\
         output: {}\n\
         ascii: {}\n\
         filter: {}\n\
         timeout: {}s\n",
        config.package,
        config.repo_input,
        config.mode(),
        config.output,
        config.ascii,
        config.filter,
        config.timeout.as_secs(),
    )
}

/// Names containing `filter` are left out; an empty filter keeps everything.
pub fn render_dependencies(dependencies: &[PackageName], filter: &str) -> String {
    let shown: Vec<&PackageName> = dependencies
        .iter()
        .filter(|name| filter.is_empty() || !name.as_str().contains(filter))
        .collect();

    let mut out = String::from("Direct dependencies:\n");
    if shown.is_empty() {
        out.push_str(NO_DEPENDENCIES);
        out.push('\n');
    } else {
        for name in shown {
            out.push_str(&format!("  {}\n", name));
        }
    }
    out
}
