//! Version command

use crate::cli::VersionArgs;
use crate::version::VersionInfo;
use anyhow::Result;

pub fn run(args: VersionArgs) -> Result<()> {
    let info = VersionInfo::current();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.display());

        if let Some(date) = &info.build_date {
            println!("Build date: {}", date);
        }
        let majors: Vec<String> = info
            .angular_versions
            .iter()
            .map(|major| format!("v{}", major))
            .collect();
        println!("Angular:    {}", majors.join(", "));
    }

    Ok(())
}
