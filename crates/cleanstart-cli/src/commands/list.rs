//! Implementation of the `cleanstart list` command.
//!
//! Shows the pinned dev-dependency set for a project type (default: node)
//! without touching the filesystem or the package manager.

use cleanstart_core::domain::{ProjectType, dependencies_for};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let project_type: ProjectType = args
        .project_type
        .map(Into::into)
        .unwrap_or_default();
    let deps = dependencies_for(project_type);

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Dev dependencies ({project_type}):"))?;
            for dep in &deps {
                output.print(&format!("  {} @ {}", dep.name(), dep.version()))?;
            }
            output.print("")?;
            output.print(&format!("{} packages", deps.len()))?;
        }

        ListFormat::List => {
            for dep in &deps {
                println!("{dep}");
            }
        }

        ListFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let value = serde_json::json!({
                "projectType": project_type.to_string(),
                "dependencies": deps
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "name": d.name(),
                            "version": d.version(),
                            "spec": d.spec(),
                        })
                    })
                    .collect::<Vec<_>>(),
            });
            let json = serde_json::to_string_pretty(&value)
                .unwrap_or_else(|_| "{}".into());
            println!("{json}");
        }
    }

    Ok(())
}
