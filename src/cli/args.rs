pub struct Args {
    pub seed: Option<u64>,
    pub level: Option<u32>,
}

pub fn parse() -> Args {
    let mut args = Args {
        seed: None,
        level: None,
    };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                if let Some(val) = iter.next() {
                    args.seed = Some(
                        val.parse::<u64>()
                            .expect("seed must be a valid integer"),
                    );
                } else {
                    eprintln!("Error: --seed requires a value");
                    std::process::exit(1);
                }
            }
            "--level" | "-l" => {
                if let Some(val) = iter.next() {
                    args.level = Some(
                        val.parse::<u32>()
                            .expect("level must be a positive integer"),
                    );
                } else {
                    eprintln!("Error: --level requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Usage: zombie_escape [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --seed <INT>   Seed for the random number generator");
                println!("  -l, --level <INT>  Starting level (default 1)");
                println!("  -h, --help         Print help");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    args
}
