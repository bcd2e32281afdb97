use zipgrid::game::{Game, MoveOutcome};
use zipgrid::{Difficulty, is_complete};

#[test]
fn play_two_levels() {
    let mut game = Game::new(1).unwrap();
    assert_eq!(game.level.difficulty, Difficulty::Easy);
    assert!(game.path().is_empty());

    let solution = game.level.solution_path.clone();
    let last = solution.len() - 1;
    for (i, cell) in solution.iter().enumerate() {
        let outcome = game.handle_cell(*cell, true);
        match i {
            0 => assert_eq!(outcome, MoveOutcome::Started),
            _ if i == last => assert!(matches!(outcome, MoveOutcome::Solved(_))),
            _ => assert_eq!(outcome, MoveOutcome::Extended),
        }
    }
    assert!(is_complete(game.path(), game.grid()));
    let first_total = game.score.total;
    assert!(first_total > 0);

    game.next_level().unwrap();
    assert_eq!(game.level_number, 2);
    let solution = game.level.solution_path.clone();
    for cell in &solution[1..] {
        game.handle_cell(*cell, false);
    }
    assert!(game.solved);
    assert_eq!(game.score.streak, 2);
    assert!(game.score.total > first_total);
}

#[test]
fn hint_shows_the_next_cells() {
    let mut game = Game::new(3).unwrap();
    let solution = game.level.solution_path.clone();
    game.handle_cell(solution[0], false);
    game.handle_cell(solution[1], false);

    let hint = game.hint().unwrap();
    assert_eq!(hint.path, solution[..5].to_vec());
    assert_eq!(hint.cell, Some(solution[4]));
    assert_eq!(game.path(), &solution[..2]);
}
