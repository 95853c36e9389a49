pub const LINKEDIN_SHARE_URL: &str = "https://www.linkedin.com/sharing/share-offsite/";

pub fn build_share_link(text: &str) -> String {
    format!("{}?text={}", LINKEDIN_SHARE_URL, urlencoding::encode(text))
}
