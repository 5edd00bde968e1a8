use super::{numbered_steps, ExplanationTemplate};
use crate::store::operations::explanations::{
    CommonMistake, Example, ExplanationContent, Formula,
};
use crate::store::operations::topics::{Category, Difficulty};

fn formulas(items: &[(&str, &str)]) -> Vec<Formula> {
    items
        .iter()
        .map(|(formula, description)| Formula {
            formula: formula.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn mistakes(items: &[(&str, &str)]) -> Vec<CommonMistake> {
    items
        .iter()
        .map(|(mistake, correction)| CommonMistake {
            mistake: mistake.to_string(),
            correction: correction.to_string(),
        })
        .collect()
}

fn example(title: &str, content: &str, solution: &str) -> Example {
    Example {
        title: title.to_string(),
        content: content.to_string(),
        solution: Some(solution.to_string()),
    }
}

fn tips(items: &[&str]) -> Vec<String> {
    items.iter().map(|tip| tip.to_string()).collect()
}

pub(super) fn pythagorean_theorem() -> ExplanationTemplate {
    ExplanationTemplate {
        title: "The Pythagorean Theorem".to_string(),
        category: Category::Geometry,
        difficulty: Difficulty::Beginner,
        content: ExplanationContent {
            simple_summary: "The Pythagorean Theorem shows how the sides of a right triangle \
                relate: the square of the hypotenuse equals the sum of the squares of the other \
                two sides."
                .to_string(),
            detailed_explanation: "The Pythagorean Theorem is one of the most famous mathematical \
                relationships in geometry. It applies exclusively to right triangles (triangles \
                with one 90-degree angle).\n\n\
                The theorem states that in a right triangle, if we label the two shorter sides as \
                'a' and 'b', and the longest side (opposite the right angle, called the \
                hypotenuse) as 'c', then a² + b² = c².\n\n\
                This relationship arises from the geometric properties of squares constructed on \
                each side of the triangle. If you draw squares on each of the three sides, the \
                area of the square on the hypotenuse equals the combined areas of the squares on \
                the other two sides.\n\n\
                The theorem has countless applications in mathematics, physics, engineering, and \
                everyday problem-solving. It forms the foundation for distance calculations, \
                trigonometry, and even plays a role in Einstein's theory of relativity."
                .to_string(),
            formulas: formulas(&[
                ("a² + b² = c²", "Where a and b are the legs, and c is the hypotenuse"),
                ("c = √(a² + b²)", "To find the hypotenuse"),
                (
                    "a = √(c² - b²)",
                    "To find a leg when you know the hypotenuse and other leg",
                ),
            ]),
            steps: numbered_steps(&[
                (
                    "Identify the right triangle",
                    "Make sure your triangle has a 90-degree angle. The Pythagorean Theorem only \
                     works for right triangles.",
                ),
                (
                    "Label the sides",
                    "Label the two shorter sides as a and b (the legs), and the longest side as c \
                     (the hypotenuse). The hypotenuse is always opposite the right angle.",
                ),
                (
                    "Square the legs",
                    "Calculate a² and b² by multiplying each side by itself.",
                ),
                ("Add the squares", "Add the two squared values: a² + b²"),
                (
                    "Take the square root",
                    "To find c, take the square root of the sum: c = √(a² + b²)",
                ),
            ]),
            examples: vec![
                example(
                    "Simple Example: 3-4-5 Triangle",
                    "If a = 3 and b = 4, find c.",
                    "Step 1: Square the legs\na² = 3² = 9\nb² = 4² = 16\n\n\
                     Step 2: Add them together\na² + b² = 9 + 16 = 25\n\n\
                     Step 3: Take the square root\nc = √25 = 5\n\n\
                     Answer: The hypotenuse is 5 units long.",
                ),
                example(
                    "Real-World Example: Ladder Against a Wall",
                    "A 13-foot ladder leans against a wall. The base of the ladder is 5 feet from \
                     the wall. How high up the wall does the ladder reach?",
                    "This is a right triangle where:\n\
                     - The ladder is the hypotenuse (c = 13 feet)\n\
                     - The distance from the wall is one leg (a = 5 feet)\n\
                     - The height on the wall is the other leg (b = ?)\n\n\
                     Using the formula: a² + b² = c²\n5² + b² = 13²\n25 + b² = 169\n\
                     b² = 169 - 25 = 144\nb = √144 = 12\n\n\
                     Answer: The ladder reaches 12 feet up the wall.",
                ),
            ],
            common_mistakes: mistakes(&[
                (
                    "Using the theorem on non-right triangles",
                    "Always verify that your triangle has a 90-degree angle before applying the \
                     Pythagorean Theorem.",
                ),
                (
                    "Confusing which side is the hypotenuse",
                    "The hypotenuse is always the longest side and is always opposite the right \
                     angle. It should always be labeled as c.",
                ),
                (
                    "Forgetting to take the square root",
                    "After calculating a² + b², remember to take the square root to find c. The \
                     final answer is √(a² + b²), not just a² + b².",
                ),
                (
                    "Adding the sides before squaring",
                    "You must square first, then add. It's a² + b², not (a + b)².",
                ),
            ]),
            tips_and_tricks: tips(&[
                "Common Pythagorean triples to memorize: 3-4-5, 5-12-13, 8-15-17, and 7-24-25. \
                 Any multiple of these also works (6-8-10, 9-12-15, etc.).",
                "The theorem works in reverse: if a² + b² = c², then the triangle must be a right \
                 triangle.",
                "The distance formula in coordinate geometry (√[(x₂-x₁)² + (y₂-y₁)²]) is based on \
                 the Pythagorean Theorem.",
                "Think of the theorem as a \"balance\" - the area of the big square equals the sum \
                 of the two smaller squares.",
            ]),
            practice_ideas: "Try drawing different right triangles and measuring their sides to \
                verify the theorem. Practice with real-world problems like finding distances on \
                maps, or calculating diagonal distances across rectangular spaces. Challenge \
                yourself with problems where you need to find a leg instead of the hypotenuse."
                .to_string(),
            summary: "The Pythagorean Theorem (a² + b² = c²) is a fundamental relationship in \
                geometry that connects the three sides of any right triangle. It states that the \
                square of the hypotenuse equals the sum of the squares of the other two sides. \
                This elegant formula has applications far beyond geometry, including physics, \
                engineering, computer graphics, and navigation. Remember: it only works for right \
                triangles, and the hypotenuse is always the longest side opposite the right angle."
                .to_string(),
        },
    }
}

pub(super) fn quadratic_equations() -> ExplanationTemplate {
    ExplanationTemplate {
        title: "Quadratic Equations".to_string(),
        category: Category::Algebra,
        difficulty: Difficulty::Intermediate,
        content: ExplanationContent {
            simple_summary: "A quadratic equation is a polynomial equation of degree 2, typically \
                written as ax² + bx + c = 0, and can be solved using multiple methods including \
                factoring, completing the square, or the quadratic formula."
                .to_string(),
            detailed_explanation: "Quadratic equations are second-degree polynomial equations, \
                meaning the highest power of the variable is 2. They appear everywhere in \
                mathematics, physics, engineering, and real-world applications like projectile \
                motion, optimization problems, and profit calculations.\n\n\
                The standard form is ax² + bx + c = 0, where:\n\
                - a is the coefficient of x² (and cannot be zero, or it wouldn't be quadratic)\n\
                - b is the coefficient of x\n\
                - c is the constant term\n\n\
                The solutions to a quadratic equation are called roots or zeros. A quadratic \
                equation can have:\n\
                - Two distinct real solutions\n\
                - One repeated real solution (when the parabola touches the x-axis at exactly one \
                point)\n\
                - Two complex solutions (when the parabola doesn't cross the x-axis)\n\n\
                The graph of a quadratic equation is a parabola, which opens upward if a > 0 and \
                downward if a < 0. The roots are the x-intercepts of this parabola."
                .to_string(),
            formulas: formulas(&[
                ("ax² + bx + c = 0", "Standard form of a quadratic equation"),
                (
                    "x = (-b ± √(b² - 4ac)) / (2a)",
                    "The quadratic formula - works for all quadratic equations",
                ),
                ("b² - 4ac", "The discriminant - tells you the nature of the roots"),
            ]),
            steps: numbered_steps(&[
                (
                    "Write in standard form",
                    "Rearrange the equation so it equals zero: ax² + bx + c = 0",
                ),
                (
                    "Identify a, b, and c",
                    "Note the coefficients: a (coefficient of x²), b (coefficient of x), and c \
                     (constant term)",
                ),
                (
                    "Choose a solution method",
                    "Try factoring first. If that doesn't work easily, use the quadratic formula.",
                ),
                (
                    "Apply the quadratic formula",
                    "Substitute a, b, and c into x = (-b ± √(b² - 4ac)) / (2a)",
                ),
                (
                    "Simplify",
                    "Calculate the discriminant (b² - 4ac), then find both solutions using + and -",
                ),
            ]),
            examples: vec![
                example(
                    "Simple Factoring Example",
                    "Solve x² - 5x + 6 = 0",
                    "Method 1: Factoring\n\
                     We need two numbers that multiply to 6 and add to -5.\n\
                     Those numbers are -2 and -3.\n\n\
                     x² - 5x + 6 = 0\n(x - 2)(x - 3) = 0\n\n\
                     Set each factor to zero:\nx - 2 = 0  →  x = 2\nx - 3 = 0  →  x = 3\n\n\
                     Answer: x = 2 or x = 3",
                ),
                example(
                    "Using the Quadratic Formula",
                    "Solve 2x² + 5x - 3 = 0",
                    "Here: a = 2, b = 5, c = -3\n\n\
                     x = (-b ± √(b² - 4ac)) / (2a)\n\
                     x = (-5 ± √(5² - 4(2)(-3))) / (2(2))\n\
                     x = (-5 ± √(25 + 24)) / 4\n\
                     x = (-5 ± √49) / 4\n\
                     x = (-5 ± 7) / 4\n\n\
                     Two solutions:\n\
                     x = (-5 + 7) / 4 = 2/4 = 1/2\n\
                     x = (-5 - 7) / 4 = -12/4 = -3\n\n\
                     Answer: x = 1/2 or x = -3",
                ),
            ],
            common_mistakes: mistakes(&[
                (
                    "Forgetting the ± sign in the quadratic formula",
                    "The ± means you must calculate TWO answers: one with + and one with -",
                ),
                (
                    "Sign errors with b in the formula",
                    "The formula has -b, so if b is negative, -b becomes positive. Be careful with \
                     signs!",
                ),
                (
                    "Incorrect calculation of the discriminant",
                    "Remember it's b² - 4ac, not b - 4ac. The b must be squared first.",
                ),
                (
                    "Dividing only part of the numerator by 2a",
                    "The entire numerator (-b ± √discriminant) must be divided by 2a",
                ),
            ]),
            tips_and_tricks: tips(&[
                "Check the discriminant (b² - 4ac) first: if positive, you have 2 real solutions; \
                 if zero, 1 solution; if negative, no real solutions.",
                "Perfect square trinomials like x² + 6x + 9 = (x + 3)² are easy to spot: the \
                 constant term is (b/2)²",
                "You can always verify your answers by substituting them back into the original \
                 equation.",
                "Memorize the quadratic formula song or mnemonic: \"x equals negative b, plus or \
                 minus the square root, of b squared minus 4ac, all over 2a\"",
            ]),
            practice_ideas: "Start with simple factorable quadratics, then progress to using the \
                quadratic formula. Practice identifying a, b, and c in different formats. Try \
                graphing quadratics to visualize where the solutions appear as x-intercepts. \
                Create word problems involving area or projectile motion that lead to quadratic \
                equations."
                .to_string(),
            summary: "Quadratic equations (ax² + bx + c = 0) are second-degree polynomials with \
                applications throughout mathematics and science. They can be solved by factoring \
                when possible, or by using the reliable quadratic formula: x = (-b ± √(b² - 4ac)) \
                / (2a). The discriminant (b² - 4ac) tells you whether you'll get two, one, or no \
                real solutions. Understanding quadratics is essential for algebra, calculus, \
                physics, and many real-world problem-solving scenarios."
                .to_string(),
        },
    }
}
