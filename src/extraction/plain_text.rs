/// Decodes bytes as UTF-8, dropping any invalid sequences instead of failing.
pub fn extract(content: &[u8]) -> String {
    let mut text = String::with_capacity(content.len());
    for chunk in content.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
