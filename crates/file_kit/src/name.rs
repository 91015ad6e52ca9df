//! Pure URL/file-name string parsing helpers.
//!
//! All helpers are zero-allocation slices of the input. Empty input yields
//! empty output; a URL with no `/` is treated as its own file name; a file
//! name with no `.` is returned whole by both [`ext_name`] and [`main_name`].

/// Returns the last path segment of `url` (the file name, extension included).
///
/// `http://www.example.com/a/b/c.jpg` → `c.jpg`
pub fn file_name(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// Returns the segment after the last `.` of the file name (the extension).
///
/// `http://www.example.com/a/b/c.jpg` → `jpg`
pub fn ext_name(url: &str) -> &str {
    let name = file_name(url);
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Returns the segment before the first `.` of the file name (the main name).
///
/// `http://www.example.com/a/b/c.jpg` → `c`
pub fn main_name(url: &str) -> &str {
    let name = file_name(url);
    match name.find('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Returns everything before the last `/` of `url` (the path).
///
/// `http://www.example.com/a/b/c.jpg` → `http://www.example.com/a/b`
pub fn path_name(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_helpers_match_expected_cases() {
        let cases = [
            // (url, file_name, ext_name, main_name, path_name)
            ("a/b/c.jpg", "c.jpg", "jpg", "c", "a/b"),
            (
                "http://www.example.com/a/b/c.jpg",
                "c.jpg",
                "jpg",
                "c",
                "http://www.example.com/a/b",
            ),
            ("", "", "", "", ""),
            ("c.jpg", "c.jpg", "jpg", "c", ""),
            ("noext", "noext", "noext", "noext", ""),
            ("a/b/archive.tar.gz", "archive.tar.gz", "gz", "archive", "a/b"),
            ("a/b/", "", "", "", "a/b"),
        ];

        for (url, file, ext, main, path) in cases {
            assert_eq!(file_name(url), file, "url={url:?}");
            assert_eq!(ext_name(url), ext, "url={url:?}");
            assert_eq!(main_name(url), main, "url={url:?}");
            assert_eq!(path_name(url), path, "url={url:?}");
        }
    }

    #[test]
    fn split_join_round_trips_file_name() {
        let urls = ["a/b/c.jpg", "c.jpg", "http://x/y/z.tar.gz", "a/b/noext"];
        for url in urls {
            let rejoined = format!("{}/{}", path_name(url), file_name(url));
            assert_eq!(file_name(&rejoined), file_name(url), "url={url:?}");
        }
    }
}
