use battlesnake_referee::{
    engine::{is_alive, Board, Snake},
    fightsnake::types::{Coord, Direction},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

fn make_snake(
    id: usize,
    board_width: i64,
    board_height: i64,
    num_players: usize,
) -> Snake {
    let spacing = board_width / num_players as i64;
    let offset = spacing / 2;

    let xpos = offset + spacing * id as i64;

    Snake::new(
        format!("snake-{id}"),
        100,
        (2..board_height - 2).rev().map(|y| Coord { x: xpos, y }),
    )
    .unwrap()
}

fn make_board(num_players: usize, board_width: i64, board_height: i64) -> Board {
    let mut rng = rand::thread_rng();

    Board::new(
        board_width,
        board_height,
        (0..rng.gen_range(5..10))
            .map(|_| Coord {
                x: rng.gen_range(0..board_width),
                y: rng.gen_range(0..board_height),
            })
            .collect(),
        (0..num_players)
            .map(|id| make_snake(id, board_width, board_height, num_players))
            .collect(),
    )
    .unwrap()
}

fn bench_turn(c: &mut Criterion) {
    let board = make_board(4, 19, 19);
    let ids: Vec<_> = board
        .snakes()
        .iter()
        .map(|snake| snake.id().to_owned())
        .collect();

    c.bench_function("advance 4 snakes on 19x19", |b| {
        b.iter(|| {
            ids.iter()
                .map(|id| board.advance(id, black_box(Direction::Up)).unwrap())
                .collect::<Vec<_>>()
        });
    });

    c.bench_function("is_alive 4 snakes on 19x19", |b| {
        b.iter(|| {
            ids.iter()
                .filter(|id| is_alive(black_box(&board), id).unwrap())
                .count()
        });
    });
}

criterion_group!(benches, bench_turn);
criterion_main!(benches);
