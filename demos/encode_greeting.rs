// Build the greeting update call and show the encoded text argument

use move_args::{CallArg, Command, Config, encode_string};

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| "Hello world!".to_string());

    let encoded = match encode_string(&text) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("✗ Encoding failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Text: {:?}", text);
    println!("UTF-8 bytes: {}", text.len());
    println!("Encoded: {}\n", hex::encode(&encoded));

    let config = Config::default();
    let plan = match config.greeting().update_text(&text) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    for command in plan.commands() {
        if let Command::MoveCall { target, arguments } = command {
            println!("Call {}", target);
            for arg in arguments {
                match arg {
                    CallArg::Pure(bytes) => println!("  pure   {}", hex::encode(bytes)),
                    CallArg::Object(id) => println!("  object {}", id),
                    CallArg::NestedResult(cmd, idx) => println!("  result ({}, {})", cmd, idx),
                }
            }
        }
    }
}
