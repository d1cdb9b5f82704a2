//! Cold-start topology used when no saved tree exists.
//!
//! Only the shape matters to the engine (a full binary tree, every item
//! reachable); the content is just a reasonable starting vocabulary.

use super::Record;

fn ask(question: &str, yes: Record, no: Record) -> Record {
    Record::branch(question, yes, no)
}

fn guess(item: &str) -> Record {
    Record::leaf(item)
}

pub fn menagerie() -> Record {
    ask(
        "Is it a mammal?",
        ask(
            "Does it live in water?",
            ask("Is it huge?", guess("Whale"), guess("Dolphin")),
            ask(
                "Does it have 4 legs?",
                ask(
                    "Is it carnivorous?",
                    ask(
                        "Does it hunt in packs?",
                        ask("Is it a canine?", guess("Dog"), guess("Fox")),
                        ask("Is it a big cat?", guess("Tiger"), guess("Lion")),
                    ),
                    ask(
                        "Is it very large?",
                        ask("Does it have a trunk?", guess("Elephant"), guess("Horse")),
                        ask("Does it have horns?", guess("Cow"), guess("Rabbit")),
                    ),
                ),
                ask("Is it a primate?", guess("Monkey"), guess("Bear")),
            ),
        ),
        ask(
            "Does it have feathers?",
            ask(
                "Can it fly?",
                ask("Is it a bird of prey?", guess("Eagle"), guess("Parrot")),
                guess("Penguin"),
            ),
            ask(
                "Does it have scales?",
                ask(
                    "Is it dangerous?",
                    ask("Is it venomous?", guess("Snake"), guess("Crocodile")),
                    guess("Turtle"),
                ),
                ask(
                    "Does it have wings?",
                    ask("Does it make honey?", guess("Bee"), guess("Butterfly")),
                    ask(
                        "Does it live in water?",
                        guess("Fish"),
                        ask("Does it jump?", guess("Frog"), guess("Spider")),
                    ),
                ),
            ),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// the literal is a full binary tree with a distinct item per leaf
    #[test]
    fn menagerie_is_well_formed() {
        let record = menagerie();
        assert!(record.validate().is_ok());
        let tree = crate::tree::Tree::try_from(&record).expect("well formed");
        let mut items = tree.items().collect::<Vec<_>>();
        let n = items.len();
        items.sort();
        items.dedup();
        assert_eq!(items.len(), n);
        assert_eq!(n, 23);
    }
}
