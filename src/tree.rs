// JSON Pointer token escape (~0, ~1)
pub fn escape_pointer_token(raw: &str) -> String {
    raw.replace('~', "~0").replace('/', "~1")
}

pub fn child_pointer(parent: &str, token: &str) -> String {
    format!("{}/{}", parent, escape_pointer_token(token))
}

pub fn index_pointer(parent: &str, index: usize) -> String {
    format!("{}/{}", parent, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape_pointer_token("a/b~c"), "a~1b~0c");
        assert_eq!(child_pointer("", "x/y"), "/x~1y");
        assert_eq!(index_pointer("/items", 3), "/items/3");
    }
}
