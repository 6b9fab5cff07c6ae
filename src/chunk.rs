//! Chunked presentation of an exercise's content.
//!
//! Offsets and strides count symbols (chars), not bytes.

/// State of a presentation cursor.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ChunkState {
    Active,
    Exhausted,
}

/// The chunk of `stride` symbols starting at symbol `offset`, the last one may be short.
/// Returns None once offset reaches the end of the content.
pub fn chunk_at(components: &str, offset: usize, stride: usize) -> Option<&str> {
    if stride == 0 {
        return None;
    }
    let mut bounds = components
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(components.len()))
        .skip(offset);
    let start = bounds.next()?;
    if start == components.len() {
        return None;
    }
    let end = bounds.nth(stride - 1).unwrap_or(components.len());
    Some(&components[start..end])
}

/// Tracks how much of the content has been presented. Only moves forward.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PresentationCursor {
    offset: usize,
}

impl PresentationCursor {
    pub fn new() -> Self {
        PresentationCursor { offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn state(&self, length: usize) -> ChunkState {
        if self.offset < length {
            ChunkState::Active
        } else {
            ChunkState::Exhausted
        }
    }

    /// Return the chunk at the cursor and move past it.
    pub fn advance<'c>(&mut self, components: &'c str, stride: usize) -> Option<&'c str> {
        let chunk = chunk_at(components, self.offset, stride)?;
        self.offset += stride;
        Some(chunk)
    }
}

/// Lazy, non-restartable sequence of chunks driven by a cursor owned by the exercise.
#[derive(Debug)]
pub struct Chunks<'a> {
    components: &'a str,
    stride: usize,
    cursor: &'a mut PresentationCursor,
}

impl<'a> Chunks<'a> {
    pub fn new(components: &'a str, stride: usize, cursor: &'a mut PresentationCursor) -> Self {
        Chunks {
            components,
            stride,
            cursor,
        }
    }

    pub fn state(&self) -> ChunkState {
        self.cursor.state(self.components.chars().count())
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.cursor.advance(self.components, self.stride)
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}
