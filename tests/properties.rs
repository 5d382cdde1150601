//! Property tests for the machine's algebraic laws.

use enigma::plugboard::plugboard_swap;
use enigma::{Enigma, Plugboard, Reflector, Rotor, RotorKind};
use proptest::prelude::*;
use proptest::sample::subsequence;

/// Three distinct wheel indices in random order.
fn wheel_order() -> impl Strategy<Value = Vec<usize>> {
    subsequence((0..5).collect::<Vec<usize>>(), 3).prop_shuffle()
}

fn settings() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..26, 3)
}

/// Up to 13 disjoint pairs drawn from a shuffled alphabet.
fn plug_pairs() -> impl Strategy<Value = Vec<(char, char)>> {
    (Just(('A'..='Z').collect::<Vec<char>>()).prop_shuffle(), 0usize..=13).prop_map(
        |(letters, count)| {
            letters
                .chunks(2)
                .take(count)
                .map(|pair| (pair[0], pair[1]))
                .collect()
        },
    )
}

fn build(rotors: &[usize], positions: &[i32], rings: &[i32], pairs: &[(char, char)]) -> Enigma {
    Enigma::new(rotors, positions, rings, pairs).expect("generated settings are valid")
}

proptest! {
    #[test]
    fn fresh_machine_decrypts(
        rotors in wheel_order(),
        positions in settings(),
        rings in settings(),
        pairs in plug_pairs(),
        message in "[A-Za-z ]{0,200}",
    ) {
        let cipher = build(&rotors, &positions, &rings, &pairs).process(&message);
        let plain = build(&rotors, &positions, &rings, &pairs).process(&cipher);
        prop_assert_eq!(plain, message.to_ascii_uppercase());
    }

    #[test]
    fn right_rotor_advances_once_per_letter(
        rotors in wheel_order(),
        positions in settings(),
        rings in settings(),
        pairs in plug_pairs(),
        message in "[A-Z]{1,100}",
    ) {
        let mut m = build(&rotors, &positions, &rings, &pairs);
        for c in message.chars() {
            let before = m.positions()[2];
            m.encrypt_char(c);
            prop_assert_eq!(m.positions()[2], (before + 1) % 26);
        }
    }

    #[test]
    fn non_letters_are_transparent(
        rotors in wheel_order(),
        positions in settings(),
        pairs in plug_pairs(),
        message in "[A-Z0-9 .,!?-]{0,120}",
    ) {
        let rings = [0, 0, 0];
        let mut mixed = build(&rotors, &positions, &rings, &pairs);
        let out = mixed.process(&message);

        prop_assert_eq!(out.chars().count(), message.chars().count());
        for (i, o) in message.chars().zip(out.chars()) {
            if !i.is_ascii_alphabetic() {
                prop_assert_eq!(i, o);
            }
        }

        let letters: String = message.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        let mut letters_only = build(&rotors, &positions, &rings, &pairs);
        let letters_out = letters_only.process(&letters);
        prop_assert_eq!(mixed.positions(), letters_only.positions());

        let out_letters: String = out.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        prop_assert_eq!(out_letters, letters_out);
    }

    #[test]
    fn no_letter_maps_to_itself(
        rotors in wheel_order(),
        positions in settings(),
        rings in settings(),
        pairs in plug_pairs(),
        letter in prop::char::range('A', 'Z'),
    ) {
        let mut m = build(&rotors, &positions, &rings, &pairs);
        prop_assert_ne!(m.encrypt_char(letter), letter);
    }

    #[test]
    fn rotor_backward_undoes_forward(
        kind in prop::sample::select(RotorKind::ALL.to_vec()),
        position in 0i32..26,
        ring in 0i32..26,
        steps in 0usize..60,
    ) {
        let mut rotor = Rotor::new(kind.wiring(), position, ring).unwrap();
        for _ in 0..steps {
            rotor.step();
        }
        for x in 0u8..26 {
            prop_assert_eq!(rotor.backward(rotor.forward(x)), x);
        }
    }

    #[test]
    fn plugboard_swap_is_involution(pairs in plug_pairs()) {
        let board = Plugboard::new(&pairs).unwrap();
        for c in 'A'..='Z' {
            prop_assert_eq!(plugboard_swap(plugboard_swap(c, &pairs), &pairs), c);
        }
        for x in 0u8..26 {
            prop_assert_eq!(board.swap(board.swap(x)), x);
        }
    }
}

#[test]
fn reflector_has_no_fixed_points() {
    for x in 0u8..26 {
        assert_ne!(Reflector::B.reflect(x), x);
    }
}
