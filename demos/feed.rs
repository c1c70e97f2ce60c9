use pedalmap::backends::synthetic::{RecordingOutput, SyntheticSource};
use pedalmap::{
    ActionMap, EventBus, EventFilter, EventSource, Session, SessionConfig, StdoutLogger,
};

fn main() {
    // Script a tap of each switch, plus noise the translator ignores.
    let mut source = SyntheticSource::new("demo pedal");
    source.feed_key(256, 1);
    source.feed_key(256, 0);
    source.feed_key(257, 1);
    source.feed_key(257, 0);
    source.feed_key(258, 1);
    source.feed_key(258, 0);
    source.feed_key(300, 1); // unmapped code, dropped silently

    println!("feeding scripted events from '{}'", source.name());

    let mut output = RecordingOutput::new();

    let mut bus = EventBus::new();
    bus.add_listener(StdoutLogger::new(), EventFilter::All);

    {
        let mut session = Session::new(
            Box::new(source),
            &mut output,
            ActionMap::pedal_defaults(),
            bus,
            SessionConfig { debug: true },
        );
        session.run().expect("synthetic stream never dies");
    }

    println!("recorded {} pointer call(s):", output.calls().len());
    for call in output.calls() {
        println!("  {call:?}");
    }
}
