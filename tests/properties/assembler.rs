//! Property tests for artifact assembly.

use proptest::prelude::*;

use rowpush::domain::ports::NoopEventSink;
use rowpush::domain::services::ArtifactAssembler;
use rowpush::Target;
use tempfile::TempDir;

fn bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..256)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An HTML-only target assembles to exactly the file's bytes.
    #[test]
    fn property_html_only_is_verbatim(html in bytes()) {
        let root = TempDir::new().unwrap();
        let target = Target::new("t", 1, root.path().join("t/index.html"));
        std::fs::create_dir_all(root.path().join("t")).unwrap();
        std::fs::write(&target.html, &html).unwrap();

        let content = ArtifactAssembler::new(root.path(), &NoopEventSink)
            .assemble(&target)
            .unwrap();

        prop_assert_eq!(content, html);
    }

    /// PROPERTY: Script precedes stylesheet precedes HTML, each joined by one newline.
    #[test]
    fn property_blocks_keep_fixed_order(
        html in bytes(),
        script in proptest::option::of(bytes()),
        stylesheet in proptest::option::of(bytes()),
    ) {
        let root = TempDir::new().unwrap();
        let target = Target::new("t", 1, root.path().join("t/index.html"));
        std::fs::create_dir_all(root.path().join("t")).unwrap();
        std::fs::write(&target.html, &html).unwrap();

        let mut expected = Vec::new();
        if let Some(script) = &script {
            std::fs::write(&target.script, script).unwrap();
            expected.extend_from_slice(b"<script>\n");
            expected.extend_from_slice(script);
            expected.extend_from_slice(b"\n</script>\n");
        }
        if let Some(stylesheet) = &stylesheet {
            std::fs::write(&target.stylesheet, stylesheet).unwrap();
            expected.extend_from_slice(b"<style>\n");
            expected.extend_from_slice(stylesheet);
            expected.extend_from_slice(b"\n</style>\n");
        }
        expected.extend_from_slice(&html);

        let content = ArtifactAssembler::new(root.path(), &NoopEventSink)
            .assemble(&target)
            .unwrap();

        prop_assert_eq!(content, expected);
    }
}
