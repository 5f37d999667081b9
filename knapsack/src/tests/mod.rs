use crate::problem::Problem;


// Classic textbook instance, optimum is the first two items.
fn classic_problem() -> Problem {
    Problem::from_reader(r"4
5
2 3
3 4
4 5
5 6".as_bytes()).unwrap()
}

// Greedy takes the dense small item and blocks the heavy one.
fn blocking_problem() -> Problem {
    Problem::from_reader(r"3
4
1 2
4 7
2 3".as_bytes()).unwrap()
}

fn empty_problem() -> Problem {
    Problem::from_reader(r"0
10".as_bytes()).unwrap()
}
