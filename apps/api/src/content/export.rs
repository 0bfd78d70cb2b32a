use crate::content::formatter::ContentResult;

/// File name offered to the browser for the export.
pub const DOWNLOAD_FILE_NAME: &str = "youtube_content.txt";
pub const DOWNLOAD_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Plain-text export layout: TITLE, DESCRIPTION and TAGS blocks separated by
/// blank lines, with the whole output trimmed.
pub fn serialize_for_download(result: &ContentResult) -> String {
    format!(
        "TITLE:\n{}\n\nDESCRIPTION:\n{}\n\nTAGS:\n{}",
        result.title, result.description, result.tags
    )
    .trim()
    .to_string()
}

/// `Content-Disposition` value for the export response.
pub fn attachment_disposition() -> String {
    format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\"")
}
