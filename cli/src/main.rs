mod commands;
mod terminal;

use commands::{CommandLine, Commands, estimate, tables};
use terminal::text::Text;
use terminal::{logging, print};
use tripcalc_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        locale: commands.locale,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Estimate(args) => {
            print::header(Text::EstimatingHeader.get(cfg.locale), cfg.quiet);
            estimate::estimate(args, &cfg)
        }
        Commands::Tables => {
            print::header(Text::TablesHeader.get(cfg.locale), cfg.quiet);
            tables::tables(&cfg)
        }
    }
}
