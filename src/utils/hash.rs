use md5::{Digest, Md5};

pub fn calculate_md5_hash(data: &str) -> String {
    let digest = Md5::digest(data.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect::<String>()
}

/// Strong entity tag for a rendered response body.
pub fn calculate_etag(body: &str) -> String {
    format!("\"{}\"", calculate_md5_hash(body))
}
