use argread::derive::*;

#[derive(Default, ReadArgs)]
struct Parameters {
    #[argread("flag,v,verbose")]
    verbose: bool,
    items: Vec<u32>,
}

fn main() {
    let parameters = Parameters::read_args();
    let sum: u32 = parameters.items.iter().sum();

    if parameters.verbose {
        println!("Sum of {:?}: {sum}", parameters.items);
    } else {
        println!("Sum: {sum}");
    }
}
