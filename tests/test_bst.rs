extern crate rand;
extern crate search_trees;

use rand::Rng;
use search_trees::BinarySearchTree;

#[test]
fn int_test_duplicates_rejected() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = BinarySearchTree::new();
    let mut keys = Vec::new();
    for _ in 0..1_000 {
        let key = rng.gen::<i32>();
        if tree.add(key) {
            keys.push(key);
        }
    }

    let before = tree.render();
    for key in &keys {
        assert!(!tree.add(*key));
    }
    assert_eq!(tree.render(), before);
    assert_eq!(tree.len(), keys.len());
}

#[test]
fn int_test_sorted_insertion_degenerates() {
    let tree: BinarySearchTree = (0..100).collect();
    assert_eq!(tree.height(), 100);
    assert_eq!(tree.iter().collect::<Vec<i32>>(), (0..100).collect::<Vec<i32>>());
}

#[test]
fn int_test_missing_key_placed_by_comparison() {
    let mut tree: BinarySearchTree = vec![5, 3, 8].into_iter().collect();
    assert_eq!(tree.render(), "5:(3;8)");

    let trace = tree.find_or_insert(4);
    assert_eq!(trace.to_string(), "5\t3\t4\t");
    assert_eq!(tree.render(), "5:(3:(;4);8)");

    let trace = tree.find_or_insert(9);
    assert_eq!(trace.path(), &[5, 8, 9]);
    assert_eq!(tree.render(), "5:(3:(;4);8:(;9))");
}
