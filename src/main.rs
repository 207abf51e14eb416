use anyhow::Result;
use font_preload::Config;
use font_preload::log::set_quiet;
use font_preload::pipeline::run;

fn main() -> Result<()> {
    let config = Config::from_cli()?;
    set_quiet(config.quiet);
    run(&config)?;
    Ok(())
}
