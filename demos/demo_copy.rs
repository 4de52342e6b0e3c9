use argread::derive::*;

#[derive(Debug, Default, ReadArgs)]
struct Parameters {
    #[argread("flag,r,recursive")]
    recursive: bool,
    #[argread("flag,l,loud,3")]
    verbosity: u8,
    #[argread("b,buffer")]
    buffer: usize,
    source: String,
    destination: String,
    #[argread("optional")]
    mode: String,
    #[argread("skip")]
    attempts: Option<u32>,
}

fn main() {
    let parameters = Parameters::read_args();
    println!("{parameters:#?}");
}
