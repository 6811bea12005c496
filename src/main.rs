use std::env;
use std::process;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use scripts::{all_scripts, LectureScript};
use submodules::type_lib::{GOOD_RET, INPUT_ERROR};

mod scripts;
mod submodules;

/// Runs every script, or just the named one.
fn run(selection: Option<&str>) -> i32 {
    let scripts = all_scripts();
    if let Some(name) = selection {
        match scripts.iter().find(|script| script.name() == name) {
            Some(script) => match script.run() {
                Ok(()) => GOOD_RET,
                Err(err) => {
                    error!("{name} failed: {err}");
                    INPUT_ERROR
                }
            },
            None => {
                let known: Vec<&str> = scripts.iter().map(|script| script.name()).collect();
                error!("unknown script {name:?}; available: {}", known.join(", "));
                INPUT_ERROR
            }
        }
    } else {
        for script in &scripts {
            info!("running {}", script.name());
            if let Err(err) = script.run() {
                error!("{} failed: {err}", script.name());
                return INPUT_ERROR;
            }
        }
        GOOD_RET
    }
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| eprintln!("logger init failed: {err}"));

    let args: Vec<String> = env::args().collect();
    process::exit(run(args.get(1).map(String::as_str)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_script_name_is_an_input_error() {
        assert_eq!(run(Some("lect99")), INPUT_ERROR);
    }

    #[test]
    fn every_script_has_a_unique_name() {
        let mut names: Vec<&str> = all_scripts().iter().map(|script| script.name()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert!(names.contains(&"lect2") && names.contains(&"icp05"));
    }
}
