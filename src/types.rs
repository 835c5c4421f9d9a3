/// One file recovered from a dump, ready to land under the output root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpEntry {
    pub rel_path: String,
    pub content: String,
}
