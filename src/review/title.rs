/// Default maximum number of characters kept from the body, before the ellipsis.
pub const DEFAULT_TITLE_MAX_LEN: usize = 60;

pub const ELLIPSIS: &str = "...";

/// Cutting back to a word boundary is only done past this character index,
/// so that a title never shrinks to a couple of words.
const MIN_WORD_CUT: usize = 10;

/// Builds a short display title from a review body.
///
/// Whitespace runs are collapsed to single spaces and the ends trimmed. A
/// collapsed body of at most `max_len` characters is returned as is. Longer
/// bodies are truncated to `max_len` characters, cut back to the last space
/// when it sits past the tenth character, and suffixed with [`ELLIPSIS`].
///
/// Lengths count characters, not bytes.
///
/// # Examples
///
/// ```
/// use review_seeder::review::title::generate_title;
///
/// assert_eq!(generate_title("  Great\n\tproduct  ", 60), "Great product");
/// assert_eq!(
///     generate_title("The battery lasts forever and the screen is gorgeous", 20),
///     "The battery lasts..."
/// );
/// ```
pub fn generate_title(body: &str, max_len: usize) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");

    let cut_at = match collapsed.char_indices().nth(max_len) {
        Some((byte_index, _)) => byte_index,
        None => return collapsed,
    };
    let cut = &collapsed[..cut_at];

    match cut.rfind(' ') {
        Some(space) if cut[..space].chars().count() > MIN_WORD_CUT => {
            format!("{}{ELLIPSIS}", &cut[..space])
        }
        _ => format!("{cut}{ELLIPSIS}"),
    }
}
