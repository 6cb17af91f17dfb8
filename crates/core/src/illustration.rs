/// Base of the public image-generation endpoint.
pub const IMAGE_API_BASE: &str = "https://image.pollinations.ai/prompt";

/// Build the illustration URL for a story topic.
///
/// The topic is percent-encoded and wrapped in a fixed "cute gentle ...
/// children book illustration" description. The seed keeps the endpoint from
/// serving the same picture for the same topic; callers pick it at random.
pub fn illustration_url(topic: &str, seed: u64) -> String {
    let topic = urlencoding::encode(topic);
    format!(
        "{IMAGE_API_BASE}/cute%20gentle%20{topic}%20children%20book%20illustration?width=800&height=400&nologo=true&seed={seed}"
    )
}
