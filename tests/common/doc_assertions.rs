/// Assert that the document contains `line` as a complete physical line.
#[macro_export]
macro_rules! assert_doc_contains_line {
    ($doc:expr, $line:expr) => {
        assert!(
            $doc.lines().any(|l| l == $line),
            "document should contain the line {:?}, but was:\n{}",
            $line,
            $doc
        );
    };
}

/// Assert that no physical line of the document equals `line`.
#[macro_export]
macro_rules! assert_doc_not_contains_line {
    ($doc:expr, $line:expr) => {
        assert!(
            $doc.lines().all(|l| l != $line),
            "document should NOT contain the line {:?}, but was:\n{}",
            $line,
            $doc
        );
    };
}
