use std::env;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Codec {
    Base122,
    Base32,
    Base58,
    Base58Check,
    Base64,
    Base85,
    Hex,
}

impl Codec {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "base122" => Some(Self::Base122),
            "base32" => Some(Self::Base32),
            "base58" => Some(Self::Base58),
            "base58check" => Some(Self::Base58Check),
            "base64" => Some(Self::Base64),
            "base85" => Some(Self::Base85),
            "hex" => Some(Self::Hex),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    codec: Codec,
    decode: bool,
    verbose: bool,
    input: Option<String>,
}

impl Configuration {
    pub fn from_arguments(arguments: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut codec = None;
        let mut decode = false;
        let mut verbose = false;
        let mut input = None;
        for argument in arguments {
            match argument.as_str() {
                "--decode" | "-d" => decode = true,
                "--verbose" | "-v" => verbose = true,
                name if codec.is_none() => {
                    codec = Some(Codec::from_name(name).ok_or(format!("Unknown codec {}", name))?);
                }
                value if input.is_none() => input = Some(value.to_string()),
                value => return Err(format!("Unexpected argument {}", value)),
            }
        }
        Ok(Self {
            codec: codec.ok_or_else(|| String::from("Missing codec"))?,
            decode,
            verbose,
            input,
        })
    }

    pub fn new() -> Result<Self, String> {
        Self::from_arguments(env::args().skip(1))
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }

    pub fn decode(&self) -> bool {
        self.decode
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}
