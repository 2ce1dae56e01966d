//! End-to-end execution tests through `run`, plus direct `Interpreter`
//! checks where cursor or variable state matters.

use epainter_lang::{compile, run, Canvas, Color, Interpreter, RunOutcome, RuntimeError};

const SIZE: usize = 10;

fn paint(src: &str) -> RunOutcome {
    let outcome = run(src, SIZE);
    assert!(
        outcome.diagnostics.is_clean(),
        "expected clean run, got {:?}",
        outcome.diagnostics
    );
    outcome
}

fn fail(src: &str) -> (Canvas, RuntimeError) {
    let outcome = run(src, SIZE);
    let error = outcome
        .diagnostics
        .runtime
        .expect("expected a runtime failure");
    (outcome.canvas, error)
}

/// Compiles and executes, returning the interpreter for state inspection.
fn exec(src: &str) -> Interpreter {
    let program = compile(src, SIZE).expect("compile failed");
    let mut interpreter = Interpreter::new(program.stmts, Canvas::new(SIZE));
    interpreter.run().expect("run failed");
    interpreter
}

fn count(canvas: &Canvas, color: Color) -> usize {
    let size = canvas.size() as i64;
    (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.get(x, y) == Some(color))
        .count()
}

// ─── the five reference scenarios ────────────────────────────────────────────

#[test]
fn horizontal_black_line() {
    let outcome = paint("Spawn(0, 0)\nColor(\"Black\")\nDrawLine(1, 0, 3)\n");
    for x in 0..=3 {
        assert_eq!(outcome.canvas.get(x, 0), Some(Color::Black));
    }
    assert_eq!(outcome.canvas.get(4, 0), Some(Color::White));

    let interpreter = exec("Spawn(0, 0)\nColor(\"Black\")\nDrawLine(1, 0, 3)\n");
    assert_eq!((interpreter.cursor().x, interpreter.cursor().y), (3, 0));
}

#[test]
fn fill_floods_whole_canvas() {
    let outcome = paint("Spawn(5, 5)\nColor(\"Blue\")\nFill()\n");
    assert_eq!(count(&outcome.canvas, Color::Blue), SIZE * SIZE);
}

#[test]
fn counted_goto_loop_terminates() {
    let src = "Spawn(0, 0)\ni <- 0\nloop\ni <- i + 1\nGoTo[loop](i < 5)\n";
    let interpreter = exec(src);
    assert_eq!(interpreter.var("i"), Some(epainter_lang::Value::Number(5)));
}

#[test]
fn out_of_bounds_spawn_leaves_canvas_untouched() {
    // literal coordinates are caught before execution
    let outcome = run("Spawn(-1, 0)\nColor(\"Red\")\nFill()\n", SIZE);
    assert!(!outcome.diagnostics.semantic.is_empty());
    assert_eq!(count(&outcome.canvas, Color::White), SIZE * SIZE);

    // computed coordinates fail at runtime, same untouched canvas
    let (canvas, error) = fail("Spawn(0 - 1, 0)\nColor(\"Red\")\nFill()\n");
    assert!(error.message.contains("outside the canvas"));
    assert_eq!(count(&canvas, Color::White), SIZE * SIZE);
}

#[test]
fn zero_direction_rectangle_paints_border_only() {
    let outcome = run("Spawn(5, 5)\nColor(\"Black\")\nDrawRectangle(0, 0, 0, 4, 2)\n", SIZE);
    assert!(outcome.diagnostics.is_clean(), "warnings must not block");
    assert!(!outcome.diagnostics.warnings.is_empty());

    // 5x3 outline centered at (5, 5): border painted, interior not
    assert_eq!(outcome.canvas.get(3, 4), Some(Color::Black));
    assert_eq!(outcome.canvas.get(7, 6), Some(Color::Black));
    assert_eq!(outcome.canvas.get(5, 5), Some(Color::White));
    assert_eq!(count(&outcome.canvas, Color::Black), 12);
}

// ─── drawing behavior through the pipeline ───────────────────────────────────

#[test]
fn fill_twice_is_idempotent() {
    let once = paint("Spawn(2, 2)\nColor(\"Green\")\nFill()\n");
    let twice = paint("Spawn(2, 2)\nColor(\"Green\")\nFill()\nFill()\n");
    assert_eq!(count(&once.canvas, Color::Green), count(&twice.canvas, Color::Green));
}

#[test]
fn circle_clamps_against_the_edge() {
    // center one cell from the left edge, oversized radius clamps to 1
    let outcome = paint("Spawn(1, 5)\nColor(\"Red\")\nDrawCircle(0, 0, 8)\n");
    assert_eq!(outcome.canvas.get(0, 5), Some(Color::Red));
    assert_eq!(outcome.canvas.get(2, 5), Some(Color::Red));
}

#[test]
fn circle_in_a_corner_fails() {
    let (_, error) = fail("Spawn(0, 0)\nColor(\"Red\")\nr <- 3\nDrawCircle(0, 0, r)\n");
    assert!(error.message.contains("radius"));
}

#[test]
fn transparent_brush_draws_nothing() {
    // no Color statement: the brush starts Transparent
    let outcome = paint("Spawn(0, 0)\nDrawLine(1, 0, 5)\nFill()\n");
    assert_eq!(count(&outcome.canvas, Color::White), SIZE * SIZE);
}

#[test]
fn brush_size_widens_the_line() {
    let outcome = paint("Spawn(5, 0)\nColor(\"Black\")\nSize(3)\nDrawLine(0, 1, 4)\n");
    // 3-wide vertical band, rows 0..=5 once the stamp spills one cell past
    assert_eq!(outcome.canvas.get(4, 2), Some(Color::Black));
    assert_eq!(outcome.canvas.get(6, 2), Some(Color::Black));
    assert_eq!(outcome.canvas.get(3, 2), Some(Color::White));
}

#[test]
fn even_brush_size_rounds_down() {
    let interpreter = exec("Spawn(0, 0)\nSize(4)\n");
    assert_eq!(interpreter.cursor().size, 3);
}

#[test]
fn runtime_error_keeps_prior_paint() {
    let (canvas, _) = fail("Spawn(0, 0)\nColor(\"Black\")\nDrawLine(1, 0, 3)\nd <- 0\nx <- 1 / d\n");
    assert_eq!(canvas.get(3, 0), Some(Color::Black));
}

// ─── control flow ────────────────────────────────────────────────────────────

#[test]
fn false_condition_falls_through() {
    let interpreter = exec("Spawn(0, 0)\nskip\nx <- 1\nGoTo[skip](False)\nx <- 2\n");
    assert_eq!(interpreter.var("x"), Some(epainter_lang::Value::Number(2)));
}

#[test]
fn jump_guard_trips_on_unconditional_loop() {
    let (_, error) = fail("Spawn(0, 0)\nloop\nGoTo[loop](True)\n");
    assert!(error.message.contains("1000"));
}

#[test]
fn long_but_bounded_loop_stays_under_the_guard() {
    let src = "Spawn(0, 0)\ni <- 0\nloop\ni <- i + 1\nGoTo[loop](i < 900)\n";
    let interpreter = exec(src);
    assert_eq!(interpreter.var("i"), Some(epainter_lang::Value::Number(900)));
}

// ─── expression evaluation ───────────────────────────────────────────────────

#[test]
fn arithmetic_and_power() {
    let interpreter = exec("Spawn(0, 0)\nx <- 2 ** 3 ** 2\ny <- 7 % 3\nz <- -2 ** 2\n");
    // ** folds left: (2^3)^2
    assert_eq!(interpreter.var("x"), Some(epainter_lang::Value::Number(64)));
    assert_eq!(interpreter.var("y"), Some(epainter_lang::Value::Number(1)));
    // negation applies to the whole power
    assert_eq!(interpreter.var("z"), Some(epainter_lang::Value::Number(-4)));
}

#[test]
fn division_by_zero() {
    let (_, error) = fail("Spawn(0, 0)\nd <- 0\nx <- 1 / d\n");
    assert!(error.message.contains("division by zero"));
}

#[test]
fn modulo_by_zero_is_distinct() {
    let (_, error) = fail("Spawn(0, 0)\nd <- 0\nx <- 1 % d\n");
    assert!(error.message.contains("modulo by zero"));
}

#[test]
fn negative_exponent_fails() {
    let (_, error) = fail("Spawn(0, 0)\ne <- 0 - 1\nx <- 2 ** e\n");
    assert!(error.message.contains("exponent"));
}

#[test]
fn overflow_is_caught() {
    let (_, error) = fail("Spawn(0, 0)\nx <- 9223372036854775807 + 1\n");
    assert!(error.message.contains("overflow"));
}

#[test]
fn dynamic_kind_mismatch_behind_a_variable() {
    let (_, error) = fail("Spawn(0, 0)\nb <- True\nx <- b + 1\n");
    assert!(error.message.contains("number"));
}

#[test]
fn equality_of_mixed_kinds_fails_at_runtime() {
    let (_, error) = fail("Spawn(0, 0)\nb <- True\nhere\nGoTo[here](1 == b)\n");
    assert!(error.message.contains("compares"));
}

#[test]
fn color_values_flow_through_variables() {
    let outcome = paint("Spawn(0, 0)\nc <- \"Purple\"\nColor(c)\nDrawLine(1, 0, 2)\n");
    assert_eq!(outcome.canvas.get(1, 0), Some(Color::Purple));
}

// ─── built-ins ───────────────────────────────────────────────────────────────

#[test]
fn cursor_queries() {
    let interpreter = exec(
        "Spawn(2, 3)\nx <- GetActualX()\ny <- GetActualY()\nn <- GetCanvasSize()\n",
    );
    assert_eq!(interpreter.var("x"), Some(epainter_lang::Value::Number(2)));
    assert_eq!(interpreter.var("y"), Some(epainter_lang::Value::Number(3)));
    assert_eq!(interpreter.var("n"), Some(epainter_lang::Value::Number(SIZE as i64)));
}

#[test]
fn brush_queries_answer_zero_or_one() {
    let interpreter = exec(
        "Spawn(0, 0)\nColor(\"Red\")\nSize(4)\na <- IsBrushColor(\"Red\")\nb <- IsBrushColor(\"Blue\")\nc <- IsBrushSize(3)\n",
    );
    assert_eq!(interpreter.var("a"), Some(epainter_lang::Value::Number(1)));
    assert_eq!(interpreter.var("b"), Some(epainter_lang::Value::Number(0)));
    // Size(4) coerced down to 3
    assert_eq!(interpreter.var("c"), Some(epainter_lang::Value::Number(1)));
}

#[test]
fn brush_queries_combine_with_arithmetic() {
    // the 0/1 results are plain numbers, usable in any numeric context
    let interpreter = exec("Spawn(0, 0)\nx <- IsBrushSize(1) + 0\ny <- IsBrushSize(2) * 5\n");
    assert_eq!(interpreter.var("x"), Some(epainter_lang::Value::Number(1)));
    assert_eq!(interpreter.var("y"), Some(epainter_lang::Value::Number(0)));
}

#[test]
fn brush_query_drives_goto_via_comparison() {
    let src = "Spawn(0, 0)\nColor(\"Black\")\nx <- 1\nGoTo[done](IsBrushColor(\"Black\") == 1)\nx <- 2\ndone\n";
    let interpreter = exec(src);
    assert_eq!(interpreter.var("x"), Some(epainter_lang::Value::Number(1)));
}

#[test]
fn canvas_color_probe_is_cursor_relative() {
    let interpreter = exec(
        "Spawn(0, 0)\nColor(\"Black\")\nDrawLine(1, 0, 2)\na <- IsCanvasColor(\"Black\", 0, 0)\nb <- IsCanvasColor(\"Black\", 1, 0)\nc <- IsCanvasColor(\"Black\", 0 - 9, 0)\n",
    );
    // cursor ends at (2, 0): its own cell is black, (3, 0) is not
    assert_eq!(interpreter.var("a"), Some(epainter_lang::Value::Number(1)));
    assert_eq!(interpreter.var("b"), Some(epainter_lang::Value::Number(0)));
    // off-canvas probe answers no instead of failing
    assert_eq!(interpreter.var("c"), Some(epainter_lang::Value::Number(0)));
}

#[test]
fn canvas_color_probe_with_unaddressable_offset_answers_no() {
    let interpreter = exec(
        "Spawn(1, 0)\na <- IsCanvasColor(\"Red\", 9223372036854775807, 0)\n",
    );
    assert_eq!(interpreter.var("a"), Some(epainter_lang::Value::Number(0)));
}

#[test]
fn overflowing_circle_center_is_a_runtime_error() {
    let (canvas, error) = fail("Spawn(1, 0)\nColor(\"Red\")\nDrawCircle(1, 0, 9223372036854775807)\n");
    assert!(error.message.contains("overflow"));
    assert_eq!(count(&canvas, Color::White), SIZE * SIZE);
}

#[test]
fn color_count_over_a_box() {
    let interpreter = exec(
        "Spawn(0, 0)\nColor(\"Black\")\nDrawLine(1, 0, 3)\nn <- GetColorCount(\"Black\", 3, 3, 0, 0)\n",
    );
    // corners given in reverse order still count the 4 painted cells
    assert_eq!(interpreter.var("n"), Some(epainter_lang::Value::Number(4)));
}

#[test]
fn builtins_drive_control_flow() {
    let src = "Spawn(0, 0)\nColor(\"Black\")\nstep\nDrawLine(1, 0, 1)\nGoTo[step](GetActualX() < 9)\n";
    let interpreter = exec(src);
    assert_eq!(interpreter.cursor().x, 9);
}

// ─── phase gating ────────────────────────────────────────────────────────────

#[test]
fn lexical_errors_block_everything() {
    let outcome = run("Spawn(0, 0)\nColor(\"Crimson\")\nFill()\n", SIZE);
    assert!(!outcome.diagnostics.lexical.is_empty());
    assert!(outcome.diagnostics.runtime.is_none());
    assert_eq!(count(&outcome.canvas, Color::White), SIZE * SIZE);
}

#[test]
fn syntax_errors_block_execution() {
    let outcome = run("Spawn(0, 0)\nDrawLine(1, 0\n", SIZE);
    assert!(!outcome.diagnostics.syntax.is_empty());
    assert_eq!(count(&outcome.canvas, Color::White), SIZE * SIZE);
}

#[test]
fn semantic_errors_block_execution() {
    let outcome = run("Spawn(0, 0)\nColor(\"Blue\")\ny <- x\nFill()\n", SIZE);
    assert!(!outcome.diagnostics.semantic.is_empty());
    assert_eq!(count(&outcome.canvas, Color::White), SIZE * SIZE);
}

#[test]
fn runs_are_isolated() {
    let first = paint("Spawn(0, 0)\nColor(\"Red\")\nFill()\n");
    let second = paint("Spawn(0, 0)\n");
    assert_eq!(count(&first.canvas, Color::Red), SIZE * SIZE);
    assert_eq!(count(&second.canvas, Color::White), SIZE * SIZE);
}
