use day_02::*;

fn main() {
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(include_str!("../input1.txt",))).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(include_str!("../input2.txt",))).unwrap();
}

#[divan::bench]
fn parse() {
    parser::parse_games(divan::black_box(include_str!("../input1.txt",))).unwrap();
}
