// マッチ検出 - 縦横3連以上のランを検出する

use crate::constants::{H, W};
use crate::domain::board::{in_range, Board};

/// マッチとみなす最小ラン長
pub const MIN_RUN: usize = 3;

/// 指定セルを通るマッチセル集合を取得。
///
/// セル(x, y)のシンボルと同じシンボルが続く限り左右に歩いて水平ラン、
/// 上下に歩いて垂直ランを作り、長さ3以上のランのみを採用して
/// 座標で重複排除した和集合を返す。L字・T字・十字も1回のマッチとして
/// まとめて拾える。空セル・範囲外は空集合。
pub fn match_through(board: &Board, x: usize, y: usize) -> Vec<(usize, usize)> {
    let Some(base) = board.get(x, y) else {
        return vec![];
    };

    // 1方向にシンボルが続く限り歩く
    let walk = |dx: isize, dy: isize| -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut nx = x as isize + dx;
        let mut ny = y as isize + dy;
        while in_range(nx, ny) && board.get(nx as usize, ny as usize) == Some(base) {
            out.push((nx as usize, ny as usize));
            nx += dx;
            ny += dy;
        }
        out
    };

    let left = walk(-1, 0);
    let right = walk(1, 0);
    let up = walk(0, -1);
    let down = walk(0, 1);

    let mut vis = [[false; W]; H];
    let mut matched = Vec::new();
    let mut push = |cells: &[(usize, usize)]| {
        for &(cx, cy) in cells {
            if !vis[cy][cx] {
                vis[cy][cx] = true;
                matched.push((cx, cy));
            }
        }
    };

    if left.len() + right.len() + 1 >= MIN_RUN {
        push(&left);
        push(&[(x, y)]);
        push(&right);
    }
    if up.len() + down.len() + 1 >= MIN_RUN {
        push(&up);
        push(&[(x, y)]);
        push(&down);
    }

    matched
}

/// 盤面全体をスキャンし、全マッチセルの和集合を取得
pub fn scan_board(board: &Board) -> Vec<(usize, usize)> {
    let mut vis = [[false; W]; H];
    let mut matched = Vec::new();
    for y in 0..H {
        for x in 0..W {
            if vis[y][x] {
                continue;
            }
            for (mx, my) in match_through(board, x, y) {
                if !vis[my][mx] {
                    vis[my][mx] = true;
                    matched.push((mx, my));
                }
            }
        }
    }
    matched
}

/// 盤面にマッチが存在するかチェック
pub fn has_match(board: &Board) -> bool {
    for y in 0..H {
        for x in 0..W {
            if !match_through(board, x, y).is_empty() {
                return true;
            }
        }
    }
    false
}
