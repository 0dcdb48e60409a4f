/// Char-indexed cursor edits on the input line.
pub struct TextEditState;

impl TextEditState {
    pub fn split_at_cursor(text: &str, cursor: usize) -> (String, String) {
        let mut left = String::new();
        let mut right = String::new();
        for (i, ch) in text.chars().enumerate() {
            if i < cursor {
                left.push(ch);
            } else {
                right.push(ch);
            }
        }
        (left, right)
    }

    pub fn insert_text(text: &mut String, cursor: &mut usize, insert: &str) {
        let (mut out, right) = Self::split_at_cursor(text, *cursor);
        out.push_str(insert);
        out.push_str(&right);
        *text = out;
        let max = text.chars().count();
        *cursor = (*cursor + insert.chars().count()).min(max);
    }

    pub fn pop_char_before_cursor(text: &mut String, cursor: &mut usize) {
        if *cursor == 0 {
            return;
        }
        *text = text
            .chars()
            .enumerate()
            .filter(|(i, _)| i + 1 != *cursor)
            .map(|(_, ch)| ch)
            .collect();
        *cursor -= 1;
    }

    pub fn move_left(cursor: &mut usize) {
        *cursor = cursor.saturating_sub(1);
    }

    pub fn move_right(text: &str, cursor: &mut usize) {
        *cursor = (*cursor + 1).min(text.chars().count());
    }

    pub fn move_to_end(text: &str, cursor: &mut usize) {
        *cursor = text.chars().count();
    }
}
