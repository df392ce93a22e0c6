//! Request validation for ledger changes.

use super::error::LedgerError;

/// Maximum comment length, in characters.
pub const MAX_COMMENT_CHARS: usize = 8 * 1024;

/// Checks that a comment is present and not too long.
///
/// The length is measured before trimming.
///
/// # Errors
///
/// Returns [`LedgerError::CommentMissing`] or [`LedgerError::CommentTooLong`].
pub fn validate_comment(comment: Option<&str>) -> Result<&str, LedgerError> {
    let comment = comment.ok_or(LedgerError::CommentMissing)?;

    let len = comment.chars().count();
    if len > MAX_COMMENT_CHARS {
        return Err(LedgerError::CommentTooLong {
            len,
            max: MAX_COMMENT_CHARS,
        });
    }

    Ok(comment)
}
