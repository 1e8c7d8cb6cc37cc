use super::board::Card;

pub const COLUMNS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction
{
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Index focus should move to, or `None` when the move is blocked by a grid
/// edge. Only ever moves focus; flipping is a separate command.
pub fn target(index: usize, direction: Direction, len: usize, columns: usize) -> Option<usize>
{
    if columns == 0 || index >= len {
        return None;
    }

    let column = index % columns;
    let row_start = index - column;
    let next = match direction {
        Direction::Left => {
            if column > 0 {
                index - 1
            } else {
                index
            }
        }
        Direction::Right => {
            if column + 1 < columns && index + 1 < len {
                index + 1
            } else {
                index
            }
        }
        Direction::Up => index.checked_sub(columns).unwrap_or(index),
        Direction::Down => {
            let next_row_start = row_start + columns;
            if next_row_start >= len {
                index
            } else {
                (index + columns).min(len - 1)
            }
        }
        Direction::Home => row_start,
        Direction::End => (row_start + columns - 1).min(len - 1),
    };

    (next != index).then_some(next)
}

/// First unmatched card after `from`, wrapping around the board. `from`
/// itself is only returned when it is the sole unmatched card.
pub fn next_enabled(cards: &[Card], from: usize) -> Option<usize>
{
    let len = cards.len();
    if len == 0 {
        return None;
    }
    (1..=len)
        .map(|offset| (from + offset) % len)
        .find(|&index| !cards[index].is_matched)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::pairs::catalog::ANIMALS;
    use Direction::*;

    const FULL: usize = 16;

    #[test]
    fn right_stops_at_row_end()
    {
        assert_eq!(target(3, Right, FULL, COLUMNS), None);
        assert_eq!(target(7, Right, FULL, COLUMNS), None);
        assert_eq!(target(2, Right, FULL, COLUMNS), Some(3));
    }

    #[test]
    fn left_stops_at_row_start()
    {
        assert_eq!(target(4, Left, FULL, COLUMNS), None);
        assert_eq!(target(0, Left, FULL, COLUMNS), None);
        assert_eq!(target(5, Left, FULL, COLUMNS), Some(4));
    }

    #[test]
    fn vertical_moves_by_one_row()
    {
        assert_eq!(target(1, Up, FULL, COLUMNS), None);
        assert_eq!(target(9, Up, FULL, COLUMNS), Some(5));
        assert_eq!(target(9, Down, FULL, COLUMNS), Some(13));
        assert_eq!(target(13, Down, FULL, COLUMNS), None);
    }

    #[test]
    fn home_and_end_jump_within_row()
    {
        assert_eq!(target(6, Home, FULL, COLUMNS), Some(4));
        assert_eq!(target(6, End, FULL, COLUMNS), Some(7));
        assert_eq!(target(4, Home, FULL, COLUMNS), None);
        assert_eq!(target(7, End, FULL, COLUMNS), None);
    }

    #[test]
    fn short_last_row_clamps()
    {
        // 10 cards: rows [0..4], [4..8], [8, 9]
        assert_eq!(target(8, End, 10, COLUMNS), Some(9));
        assert_eq!(target(9, Right, 10, COLUMNS), None);
        assert_eq!(target(6, Down, 10, COLUMNS), Some(9));
        assert_eq!(target(5, Down, 10, COLUMNS), Some(9));
        assert_eq!(target(1, Down, 10, COLUMNS), Some(5));
        assert_eq!(target(9, Down, 10, COLUMNS), None);
        assert_eq!(target(9, Up, 10, COLUMNS), Some(5));
    }

    #[test]
    fn invalid_inputs_are_ignored()
    {
        assert_eq!(target(16, Left, FULL, COLUMNS), None);
        assert_eq!(target(0, Right, 0, COLUMNS), None);
        assert_eq!(target(2, Right, FULL, 0), None);
        assert_eq!(target(0, Right, 1, COLUMNS), None);
    }

    #[test]
    fn next_enabled_skips_matched_and_wraps()
    {
        let mut cards: Vec<Card> = (0..4).map(|id| Card::new(id, ANIMALS[id / 2])).collect();
        cards[2].is_matched = true;
        cards[3].is_matched = true;

        assert_eq!(next_enabled(&cards, 1), Some(0));
        assert_eq!(next_enabled(&cards, 2), Some(0));
        assert_eq!(next_enabled(&cards, 0), Some(1));

        cards[0].is_matched = true;
        assert_eq!(next_enabled(&cards, 1), Some(1));

        cards[1].is_matched = true;
        assert_eq!(next_enabled(&cards, 1), None);
        assert_eq!(next_enabled(&[], 0), None);
    }
}
