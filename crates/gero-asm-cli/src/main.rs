mod cli;
mod commands;
mod logging;

use cli::{CheckParams, GrammarParams, TreeParams, build_cli, verbosity};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this");
    };
    logging::init(verbosity(m));

    match name {
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "tree" => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        "grammar" => {
            let params = GrammarParams::from_matches(m);
            commands::grammar::run(params.into());
        }
        "langs" => {
            commands::langs::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
