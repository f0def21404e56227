use lidarvis::*;

use anyhow::Context as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn cli() -> clap::Command {
    clap::Command::new("lidarvis")
        .version("0.1")
        .about("draws live range readings from a rotating distance sensor")
        .arg(
            clap::Arg::new("CONFIG")
                .help("config file to use")
                .required(false)
                .index(1),
        )
        .arg(
            clap::Arg::new("port")
                .long("port")
                .value_name("PATH")
                .help("serial device of the sensor"),
        )
        .arg(
            clap::Arg::new("baud")
                .long("baud")
                .value_name("RATE")
                .value_parser(clap::value_parser!(u32))
                .help("serial baud rate"),
        )
        .arg(
            clap::Arg::new("replay")
                .long("replay")
                .value_name("FILE")
                .conflicts_with("port")
                .help("read recorded lines from a file instead of the serial port"),
        )
        .arg(
            clap::Arg::new("skip-malformed")
                .long("skip-malformed")
                .action(clap::ArgAction::SetTrue)
                .help("log and drop lines that aren't readings instead of stopping"),
        )
        .arg(
            clap::Arg::new("responsive")
                .long("responsive")
                .action(clap::ArgAction::SetTrue)
                .help("handle quit requests while waiting for the sensor"),
        )
}

fn apply_args(cfg: &mut config::Config, matches: &clap::ArgMatches) {
    if let Some(path) = matches.get_one::<String>("replay") {
        cfg.source = config::Source::File(config::FileSource { path: path.clone() });
    }

    if let Some(path) = matches.get_one::<String>("port") {
        let mut serial = match &cfg.source {
            config::Source::Serial(serial) => serial.clone(),
            config::Source::File(_) => config::SerialSource::default(),
        };
        serial.path = path.clone();
        cfg.source = config::Source::Serial(serial);
    }

    if let Some(baud) = matches.get_one::<u32>("baud") {
        if let config::Source::Serial(serial) = &mut cfg.source {
            serial.baud_rate = *baud;
        }
    }

    if matches.get_flag("skip-malformed") {
        cfg.pipeline.on_malformed = config::OnMalformed::Skip;
    }
    if matches.get_flag("responsive") {
        cfg.pipeline.responsive_shutdown = true;
    }
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    logging::init();

    // load config
    let mut cfg = match matches.get_one::<String>("CONFIG") {
        Some(name) => config::load(name).with_context(|| format!("can't load config {}", name))?,
        None => config::Config::default(),
    };
    apply_args(&mut cfg, &matches);
    cfg.validate().context("invalid config")?;
    log::debug!("config: {:#?}", cfg);

    // the first ctrl-c asks the loop to stop, a second one doesn't wait for it
    let interrupt = Arc::new(AtomicBool::new(false));
    let flag = interrupt.clone();
    ctrlc::set_handler(move || {
        if flag.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
    })
    .context("can't install ctrl-c handler")?;

    let window = lidarvis_gui::Window::open(
        &cfg.display.title,
        cfg.display.width,
        cfg.display.height,
    )
    .context("can't open window")?;
    let renderer = render::FrameRenderer::new(window, &cfg.display)?.with_interrupt(interrupt);

    let source = source::open(&cfg.source).context("can't open channel")?;
    let mapper = mapper::Mapper::new(cfg.mapping.clone())?;

    let mut pipeline = pipeline::Pipeline::new(source, mapper, renderer, cfg.pipeline.clone());
    let stats = pipeline.run().context("visualization stopped")?;
    log::info!("exiting after {} frames, {} lines skipped", stats.frames, stats.skipped);

    Ok(())
}
