/// 경로 입력 필드 편집기
///
/// 다이얼로그의 `value`와 `cursor_pos`를 빌려서 수정한다.
/// 커서는 UTF-8 바이트 인덱스이며 항상 문자 경계에 있다.
pub(super) struct InputEdit<'a> {
    value: &'a mut String,
    cursor: &'a mut usize,
}

/// Ctrl+W 경계: 경로 구분자, 공백, 따옴표
fn is_component_boundary(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '/' | '\\' | '"' | '\'')
}

impl<'a> InputEdit<'a> {
    pub(super) fn new(value: &'a mut String, cursor: &'a mut usize) -> Self {
        *cursor = (*cursor).min(value.len());
        Self { value, cursor }
    }

    fn prev_boundary(&self) -> usize {
        self.value[..*self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.value[*self.cursor..]
            .chars()
            .next()
            .map_or(*self.cursor, |c| *self.cursor + c.len_utf8())
    }

    pub(super) fn insert(&mut self, c: char) {
        self.value.insert(*self.cursor, c);
        *self.cursor += c.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        let start = self.prev_boundary();
        self.value.replace_range(start..*self.cursor, "");
        *self.cursor = start;
    }

    pub(super) fn delete(&mut self) {
        let end = self.next_boundary();
        self.value.replace_range(*self.cursor..end, "");
    }

    pub(super) fn left(&mut self) {
        *self.cursor = self.prev_boundary();
    }

    pub(super) fn right(&mut self) {
        *self.cursor = self.next_boundary();
    }

    pub(super) fn home(&mut self) {
        *self.cursor = 0;
    }

    pub(super) fn end(&mut self) {
        *self.cursor = self.value.len();
    }

    /// Ctrl+W: 커서 앞 경로 구성요소(또는 목록 토큰) 하나 삭제
    ///
    /// 커서 바로 앞의 구분자는 구성요소와 함께 지운다.
    /// `/srv/data/` → `/srv/`, `a.txt b.txt` (커서가 b 앞) → `b.txt`
    pub(super) fn delete_component(&mut self) {
        let before = &self.value[..*self.cursor];
        let trimmed = before.trim_end_matches(is_component_boundary);
        let start = trimmed
            .char_indices()
            .rfind(|&(_, ch)| is_component_boundary(ch))
            .map_or(0, |(i, ch)| i + ch.len_utf8());
        self.value.replace_range(start..*self.cursor, "");
        *self.cursor = start;
    }
}
