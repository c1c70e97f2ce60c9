use clap::Parser;
use pedalmap::backends::evdev_input::{EvdevEnumerator, EvdevSource};
use pedalmap::backends::uinput::UinputMouse;
use pedalmap::{
    ActionMap, DeviceIdentity, EventBus, EventFilter, Locator, PedalError, RetryPolicy, Session,
    SessionConfig, SleepWaiter, StdoutLogger,
};
use std::process::ExitCode;

/// Identity triple of the supported pedal.
const PEDAL: DeviceIdentity = DeviceIdentity::new(0x05f3, 0x00ff, 0x0100);

/// Name the virtual device registers under.
const VIRTUAL_NAME: &str = "pedalmap virtual mouse";

/// Bridge a foot pedal to a virtual mouse.
#[derive(Parser, Debug)]
#[command(name = "pedalmap", version, about = "Foot pedal to virtual mouse bridge")]
struct Cli {
    /// Print one line per decoded pedal event.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The virtual mouse outlives every session, so the host keeps seeing
    // one device across pedal replugs.
    let mut mouse = match UinputMouse::create(VIRTUAL_NAME) {
        Ok(mouse) => mouse,
        Err(e) => {
            eprintln!("cannot create virtual mouse: {e}");
            return ExitCode::FAILURE;
        }
    };

    loop {
        println!("Starting...");
        match run(&cli, &mut mouse) {
            Ok(()) => break,
            Err(e) => println!("Error: {e}. Restarting..."),
        }
    }

    ExitCode::SUCCESS
}

/// One pipeline run: locate, open, translate until the stream dies.
fn run(cli: &Cli, mouse: &mut UinputMouse) -> Result<(), PedalError> {
    let mut locator = Locator::new(EvdevEnumerator, RetryPolicy::default(), SleepWaiter);
    let entry = locator.wait_for(&PEDAL);
    println!(
        "Using event path: '{}' ({})",
        entry.path.display(),
        entry.meta.name.as_deref().unwrap_or("unnamed")
    );

    let source = EvdevSource::open(&entry.path).map_err(PedalError::Open)?;

    let mut bus = EventBus::new();
    if cli.debug {
        bus.add_listener(StdoutLogger::new(), EventFilter::All);
    }

    let mut session = Session::new(
        Box::new(source),
        mouse,
        ActionMap::pedal_defaults(),
        bus,
        SessionConfig { debug: cli.debug },
    );
    session.run()?;
    Ok(())
}
