use argread::Reader;

fn main() {
    let mut verbose = false;
    let mut items: Vec<u32> = Vec::default();

    let mut reader = Reader::new()
        .flag(&mut verbose, true, Some('v'), Some("verbose"))
        .var(&mut items);

    if let Err(error) = reader.process_args() {
        eprintln!("Parse error: {error}");
        std::process::exit(1);
    }

    drop(reader);
    let sum: u32 = items.iter().sum();

    if verbose {
        println!("Sum of {items:?}: {sum}");
    } else {
        println!("Sum: {sum}");
    }
}
