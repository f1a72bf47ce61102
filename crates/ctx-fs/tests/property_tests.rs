use ctx_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_paths_never_contain_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));

        // Native round trip keeps the normalized form
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn join_keeps_base_prefix(base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}", seg in "[a-z_-]{1,12}\\.md") {
        let root = NormalizedPath::new(&base);
        let joined = root.join(&seg);

        prop_assert!(joined.as_str().starts_with(root.as_str()));
        prop_assert_eq!(joined.file_name(), Some(seg.as_str()));
        prop_assert_eq!(joined.relative_to(&root), Some(seg.as_str()));
    }
}
