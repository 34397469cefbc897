use basecodec::configuration::{Codec, Configuration};
use basecodec::error::Error;
use basecodec::logger::Logger;
use basecodec::{base122, base32, base58, base58_check, base64, base85, hex};
use std::io::{self, Read, Write};
use std::process;

const USAGE: &str = "Usage: basecodec [--decode] [--verbose] <base32|base58|base58check|base64|base85|base122|hex> [input]";

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    if let Err(error) = run(&configuration) {
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn run(configuration: &Configuration) -> Result<(), Error> {
    let logger = Logger::new();
    if configuration.decode() {
        let text = match configuration.input() {
            Some(input) => input.to_string(),
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer).map_err(Error::wrap)?;
                buffer
            }
        };
        let text = text.trim_end_matches('\n');
        let output = decode(configuration.codec(), text)?;
        io::stdout().write_all(&output).map_err(Error::wrap)?;
        if configuration.verbose() {
            logger.log(format!("Decoded {} characters into {} bytes", text.chars().count(), output.len()));
        }
    } else {
        let input = match configuration.input() {
            Some(input) => input.as_bytes().to_vec(),
            None => {
                let mut buffer = Vec::new();
                io::stdin().read_to_end(&mut buffer).map_err(Error::wrap)?;
                buffer
            }
        };
        let output = encode(configuration.codec(), &input);
        println!("{}", output);
        if configuration.verbose() {
            logger.log(format!("Encoded {} bytes into {} characters", input.len(), output.chars().count()));
        }
    }
    Ok(())
}

fn encode(codec: Codec, input: &[u8]) -> String {
    match codec {
        Codec::Base122 => base122::encode(input),
        Codec::Base32 => base32::encode(input),
        Codec::Base58 => base58::encode(input),
        Codec::Base58Check => base58_check::encode(input),
        Codec::Base64 => base64::encode(input),
        Codec::Base85 => base85::encode(input),
        Codec::Hex => hex::encode(input),
    }
}

fn decode(codec: Codec, input: &str) -> Result<Vec<u8>, Error> {
    match codec {
        Codec::Base122 => Ok(base122::decode(input)),
        Codec::Base32 => base32::decode(input).map_err(Error::wrap),
        Codec::Base58 => base58::decode(input).map_err(Error::wrap),
        Codec::Base58Check => base58_check::decode(input).map_err(Error::wrap),
        Codec::Base64 => base64::decode(input).map_err(Error::wrap),
        Codec::Base85 => base85::decode(input).map_err(Error::wrap),
        Codec::Hex => hex::decode(input).map_err(Error::wrap),
    }
}
