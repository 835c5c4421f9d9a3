use crate::types::DumpEntry;

pub const MARKER_START: &str = "===FILE:";
pub const MARKER_END: &str = "===END";

/// Split a flat dump into the files it describes, in dump order.
///
/// Lines keep their terminators, so content survives byte for byte. Text
/// before the first `===FILE:` marker is dropped, and a dump that never
/// closes its last section still yields that file.
pub fn parse_dump(text: &str) -> Vec<DumpEntry> {
    let mut files = Vec::new();
    let mut current_path: Option<String> = None;
    let mut current_content = String::new();

    for line in text.split_inclusive('\n') {
        if let Some(rest) = line.strip_prefix(MARKER_START) {
            // flush previous file if any
            if let Some(path) = current_path.take() {
                files.push(DumpEntry {
                    rel_path: path,
                    content: std::mem::take(&mut current_content),
                });
            }
            current_path = Some(rest.trim().to_string());
            continue;
        }
        // end marker must match the whole trimmed line, so ===ENDING is content
        if line.trim() == MARKER_END {
            if let Some(path) = current_path.take() {
                files.push(DumpEntry {
                    rel_path: path,
                    content: std::mem::take(&mut current_content),
                });
            }
            continue;
        }
        if current_path.is_some() {
            current_content.push_str(line);
        }
    }

    // flush the last file if the dump didn't close with ===END
    if let Some(path) = current_path {
        files.push(DumpEntry {
            rel_path: path,
            content: current_content,
        });
    }

    files
}
