mod repl {
    use rpncalc::{evaluate, ShuntingParser};

    pub fn evalexpr(input: &str) {
        match ShuntingParser::parse_str(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(expr) => match evaluate(&expr.to_string()) {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => match expr.to_infix() {
                    Some(infix) => println!("{} = {}", infix, result),
                    None => println!("{}", result),
                },
            },
        };
    }

    pub fn print_rpn(input: &str) {
        match rpncalc::convert(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => println!("{}", rpn.trim_end()),
        }
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(flag) = args.first() {
        if flag == "--rpn" {
            repl::print_rpn(&args[1..].join(" "));
        } else {
            repl::evalexpr(&args.join(" "));
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            tracing::debug!(path = %path.display(), "no history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::debug!(error = %e, "could not add history entry");
                }
                repl::evalexpr(&line);
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
