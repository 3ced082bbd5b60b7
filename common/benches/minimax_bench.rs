use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_common::tictactoe::{Board, Player, apply_move, new_game, outcome, search, select_move};

fn build_board(moves: &[(usize, Player)]) -> Board {
    moves.iter().fold(new_game(), |board, &(index, player)| {
        apply_move(&board, index, player).unwrap()
    })
}

fn bench_select_move_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_3x3_single_move_empty", |b| {
        let board = new_game();
        b.iter(|| select_move(black_box(&board)))
    });
}

fn bench_select_move_after_human_opening(c: &mut Criterion) {
    c.bench_function("minimax_3x3_reply_to_center", |b| {
        let board = build_board(&[(4, Player::Human)]);
        b.iter(|| search(black_box(&board)))
    });
}

fn bench_select_move_mid_game(c: &mut Criterion) {
    c.bench_function("minimax_3x3_single_move_midgame", |b| {
        let board = build_board(&[
            (0, Player::Human),
            (4, Player::Computer),
            (8, Player::Human),
        ]);
        b.iter(|| select_move(black_box(&board)))
    });
}

fn bench_self_play_game(c: &mut Criterion) {
    c.bench_function("minimax_3x3_full_game", |b| {
        b.iter(|| {
            let mut board = new_game();
            let mut player = Player::Computer;

            // The human side reuses the selector's pick, which is always a legal cell.
            while !outcome(&board).is_over() {
                let Ok(index) = select_move(&board) else {
                    break;
                };
                board = apply_move(&board, index, player).unwrap();
                player = player.opponent();
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_select_move_empty_board,
    bench_select_move_after_human_opening,
    bench_select_move_mid_game,
    bench_self_play_game
);
criterion_main!(benches);
