use ctree::{Compare, Reversed, Tree};

use quickcheck_macros::quickcheck;

/// Orders strings case-insensitively, so "Apple" and "APPLE" are the same element.
#[derive(Default)]
struct CaseInsensitive;

impl Compare<String> for CaseInsensitive {
    fn less(&self, a: &String, b: &String) -> bool {
        a.to_lowercase() < b.to_lowercase()
    }
}

#[test]
fn strings_with_custom_comparator() {
    let mut tree: Tree<String, CaseInsensitive> = Tree::default();

    assert!(tree.insert("Apple".to_string()));
    assert!(!tree.insert("APPLE".to_string()));
    assert!(tree.insert("banana".to_string()));

    assert_eq!(tree.len(), 2);
    assert!(tree.contains(&"apple".to_string()));
    assert!(tree.remove(&"BANANA".to_string()));
    assert!(!tree.contains(&"banana".to_string()));
}

#[test]
fn composite_keys() {
    // Order by last name, then first name.
    type Name = (&'static str, &'static str);
    let by_name = |a: &Name, b: &Name| (a.1, a.0) < (b.1, b.0);
    let mut tree = Tree::with_comparator(by_name);

    tree.insert(("ada", "lovelace"));
    tree.insert(("alan", "turing"));
    tree.insert(("grace", "hopper"));

    assert!(tree.contains(&("alan", "turing")));
    assert!(!tree.contains(&("alan", "kay")));
    assert_eq!(tree.len(), 3);
}

#[test]
fn closures_can_capture() {
    let modulus = 10;
    let mut tree = Tree::with_comparator(move |a: &u32, b: &u32| a % modulus < b % modulus);

    assert!(tree.insert(3));
    // 13 is "equal" to 3 under this ordering.
    assert!(!tree.insert(13));
    assert!(tree.contains(&23));
    assert_eq!(tree.len(), 1);
}

#[quickcheck]
fn reversed_matches_natural(xs: Vec<i32>, probes: Vec<i32>) -> bool {
    let natural: Tree<_> = xs.iter().copied().collect();
    let mut reversed = Tree::with_comparator(Reversed);
    reversed.extend(xs.iter().copied());

    natural.len() == reversed.len()
        && natural.height() == reversed.height()
        && probes
            .iter()
            .chain(&xs)
            .all(|x| natural.contains(x) == reversed.contains(x))
}
