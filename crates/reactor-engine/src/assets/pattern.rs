/// Glob-style path pattern used by [`AssetStore::list`](super::AssetStore::list).
///
/// Matching is segment-wise on `/`:
/// - `*` matches any run of characters inside one segment
/// - `?` matches exactly one character inside one segment
/// - a segment that is exactly `**` matches zero or more whole segments
/// - a trailing `/` selects every path below the prefix, not the prefix itself
/// - the empty pattern matches every path
///
/// Every other character is literal, so no pattern is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    AnyDepth,
    Glob(Vec<char>),
}

impl PathPattern {
    pub fn new(pattern: &str) -> Self {
        if pattern.is_empty() {
            return Self {
                segments: vec![Segment::AnyDepth],
            };
        }

        let mut segments: Vec<Segment> = pattern
            .split('/')
            .map(|s| match s {
                "**" => Segment::AnyDepth,
                _ => Segment::Glob(s.chars().collect()),
            })
            .collect();

        if pattern.ends_with('/') {
            segments.pop();
            segments.push(Segment::Glob(vec!['*']));
            segments.push(Segment::AnyDepth);
        }
        segments.dedup_by(|a, b| *a == Segment::AnyDepth && *b == Segment::AnyDepth);

        Self { segments }
    }

    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').collect();
        match_segments(&self.segments, &parts)
    }
}

impl From<&str> for PathPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

fn match_segments(pattern: &[Segment], parts: &[&str]) -> bool {
    match pattern.split_first() {
        None => parts.is_empty(),
        Some((Segment::AnyDepth, rest)) => {
            (0..=parts.len()).any(|skip| match_segments(rest, &parts[skip..]))
        }
        Some((Segment::Glob(glob), rest)) => match parts.split_first() {
            Some((part, tail)) => {
                let chars: Vec<char> = part.chars().collect();
                match_glob(glob, &chars) && match_segments(rest, tail)
            }
            None => false,
        },
    }
}

/// Single-segment wildcard match with backtracking on the last `*`.
fn match_glob(glob: &[char], text: &[char]) -> bool {
    let (mut g, mut t) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        match glob.get(g) {
            Some('*') => {
                star = Some((g, t));
                g += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                g += 1;
                t += 1;
            }
            _ => match star {
                Some((sg, st)) => {
                    g = sg + 1;
                    t = st + 1;
                    star = Some((sg, st + 1));
                }
                None => return false,
            },
        }
    }

    glob[g..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(pattern: &str, path: &str) -> bool {
        PathPattern::new(pattern).matches(path)
    }

    #[test]
    fn star_stays_within_segment() {
        assert!(m("shaders/*", "shaders/basic.vert"));
        assert!(!m("shaders/*", "shaders/post/bloom.frag"));
        assert!(!m("shaders/*", "other/basic.vert"));
    }

    #[test]
    fn star_with_suffix() {
        assert!(m("shaders/*.frag", "shaders/basic.frag"));
        assert!(!m("shaders/*.frag", "shaders/basic.vert"));
        assert!(m("shaders/*.frag", "shaders/.frag"));
        assert!(m("*a*b*", "xaybz"));
        assert!(!m("*a*b*", "xbya"));
    }

    #[test]
    fn question_mark_is_one_char() {
        assert!(m("shaders/basic.????", "shaders/basic.vert"));
        assert!(!m("shaders/basic.???", "shaders/basic.vert"));
    }

    #[test]
    fn double_star_spans_segments() {
        assert!(m("shaders/**", "shaders/basic.vert"));
        assert!(m("shaders/**", "shaders/post/bloom.frag"));
        assert!(m("**/*.frag", "shaders/post/bloom.frag"));
        assert!(m("**/*.frag", "top.frag"));
        assert!(m("shaders/**/bloom.frag", "shaders/bloom.frag"));
        assert!(!m("shaders/**", "textures/noise.png"));
    }

    #[test]
    fn trailing_slash_selects_subtree() {
        assert!(m("shaders/", "shaders/basic.vert"));
        assert!(m("shaders/", "shaders/post/bloom.frag"));
        assert!(!m("shaders/", "shaders"));
        assert!(!m("shaders/", "shadersx/a"));
        assert!(m("shaders/**/", "shaders/post/bloom.frag"));
    }

    #[test]
    fn empty_pattern_matches_everything() {
        assert!(m("", "a"));
        assert!(m("", "a/b/c"));
    }

    #[test]
    fn literal_pattern_is_exact() {
        assert!(m("shaders/basic.vert", "shaders/basic.vert"));
        assert!(!m("shaders/basic.vert", "shaders/basic.vert2"));
        assert!(!m("shaders", "shaders/basic.vert"));
    }
}
