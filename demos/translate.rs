use cmdline::{derive::*, WideString};

#[derive(Debug, Default, CmdLine)]
#[cmdline(program = "translate")]
struct Parameters {
    #[cmdline(switch = "-d")]
    depth: i32,
    #[cmdline(switch = "-e")]
    enabled: bool,
    #[cmdline(switch = "-p")]
    path: Option<String>,
    #[cmdline(switch = "-f")]
    factor: f32,
    #[cmdline(switch = "-w")]
    wide: WideString,
}

fn main() {
    let command_input: Vec<String> = std::env::args().skip(1).collect();
    let tokens: Vec<&str> = command_input.iter().map(AsRef::as_ref).collect();

    match Parameters::cmdline_parse_tokens(&tokens) {
        Ok(parameters) => println!("{parameters:#?}"),
        Err(exit_code) => {
            eprintln!("Failed to parse command line!");
            std::process::exit(exit_code);
        }
    }
}
