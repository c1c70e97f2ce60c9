use pedalmap::backends::evdev_input::EvdevEnumerator;
use pedalmap::Enumerator;

fn main() {
    let entries = EvdevEnumerator.scan();
    println!("Found {} readable input node(s)", entries.len());
    for entry in entries {
        let meta = &entry.meta;
        println!(
            "{} vendor={:04x} product={:04x} version={:04x} bus={:?} name={:?} phys={:?}",
            entry.path.display(),
            meta.vendor,
            meta.product,
            meta.version,
            meta.bus,
            meta.name,
            meta.phys,
        );
    }
}
