use crate::input::{optional_str, required_str};
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Map, Value, json};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let text = required_str(args, "text")?;
    let algorithms: Vec<Algorithm> = match optional_str(args, "algorithm")?.unwrap_or("all") {
        "all" => Algorithm::ALL.to_vec(),
        "md5" => vec![Algorithm::Md5],
        "sha1" => vec![Algorithm::Sha1],
        "sha256" => vec![Algorithm::Sha256],
        "sha512" => vec![Algorithm::Sha512],
        _ => {
            return Err(ToolError::invalid_input(
                "algorithm must be md5, sha1, sha256, sha512, or all",
            ));
        }
    };

    let mut digests = Map::new();
    let mut lines = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let digest = hex_digest(algorithm, text.as_bytes());
        lines.push(format!("{}: {digest}", algorithm.as_str()));
        digests.insert(algorithm.as_str().to_string(), json!(digest));
    }

    Ok(success_result(lines.join("\n"), Value::Object(digests)))
}

pub fn hex_digest(algorithm: Algorithm, bytes: &[u8]) -> String {
    match algorithm {
        Algorithm::Md5 => format!("{:x}", md5::compute(bytes)),
        Algorithm::Sha1 => format!("{:x}", Sha1::digest(bytes)),
        Algorithm::Sha256 => format!("{:x}", Sha256::digest(bytes)),
        Algorithm::Sha512 => format!("{:x}", Sha512::digest(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digests_of_abc() {
        assert_eq!(
            hex_digest(Algorithm::Md5, b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            hex_digest(Algorithm::Sha1, b"abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hex_digest(Algorithm::Sha256, b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(hex_digest(Algorithm::Sha512, b"abc").len(), 128);
    }

    #[test]
    fn all_returns_every_digest() {
        let result = call(&json!({"text": "abc"}));
        let structured = result["structuredContent"].as_object().expect("object");
        assert_eq!(structured.len(), 4);
        assert!(structured.contains_key("sha512"));
    }

    #[test]
    fn single_algorithm() {
        let result = call(&json!({"text": "", "algorithm": "md5"}));
        assert_eq!(
            result["structuredContent"]["md5"],
            json!("d41d8cd98f00b204e9800998ecf8427e")
        );
    }
}
