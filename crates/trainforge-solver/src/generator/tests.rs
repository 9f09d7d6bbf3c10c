use super::*;

fn drain_indices<T>(mut combos: Combinations<'_, T>) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    while let Some(indices) = combos.advance() {
        out.push(indices.to_vec());
    }
    out
}

#[test]
fn test_product_lexicographic_order() {
    let pool = [0, 1, 2];
    let tuples = drain_indices(product(&pool, 2));
    assert_eq!(
        tuples,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 1],
            vec![1, 2],
            vec![2, 0],
            vec![2, 1],
            vec![2, 2],
        ]
    );
}

#[test]
fn test_multisets_lexicographic_order() {
    let pool = [0, 1, 2];
    let tuples = drain_indices(multisets(&pool, 2));
    assert_eq!(
        tuples,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 1],
            vec![1, 2],
            vec![2, 2],
        ]
    );
}

#[test]
fn test_empty_pool_yields_nothing() {
    let pool: [u8; 0] = [];
    for k in 0..4 {
        assert_eq!(product(&pool, k).count(), 0);
        assert_eq!(multisets(&pool, k).count(), 0);
    }
}

#[test]
fn test_zero_repeat_yields_one_empty_tuple() {
    let pool = ['x', 'y'];
    let tuples: Vec<Vec<char>> = product(&pool, 0).collect();
    assert_eq!(tuples, vec![Vec::<char>::new()]);

    let tuples: Vec<Vec<char>> = multisets(&pool, 0).collect();
    assert_eq!(tuples, vec![Vec::<char>::new()]);
}

#[test]
fn test_single_item_pool() {
    let pool = ["only"];
    let tuples: Vec<_> = product(&pool, 3).collect();
    assert_eq!(tuples, vec![vec!["only", "only", "only"]]);
}

#[test]
fn test_exhausted_stays_exhausted() {
    let pool = [1, 2];
    let mut combos = product(&pool, 1);
    assert_eq!(combos.advance(), Some(&[0][..]));
    assert_eq!(combos.advance(), Some(&[1][..]));
    assert_eq!(combos.advance(), None);
    assert_eq!(combos.advance(), None);
    assert_eq!(combos.next(), None);
}

#[test]
fn test_fresh_generators_are_independent() {
    let pool = [1, 2, 3];
    let mut first = product(&pool, 2);
    first.advance();
    first.advance();

    let second: Vec<_> = product(&pool, 2).take(1).collect();
    assert_eq!(second, vec![vec![1, 1]]);

    let cloned = first.clone();
    assert_eq!(cloned.count(), first.count());
}

#[test]
fn test_early_termination_is_lazy() {
    // 12^20 tuples: only feasible if nothing is materialized ahead.
    let pool: Vec<u32> = (0..12).collect();
    let first: Vec<_> = product(&pool, 20).take(2).collect();
    assert_eq!(first[0], vec![0; 20]);
    let mut expected = vec![0; 20];
    expected[19] = 1;
    assert_eq!(first[1], expected);
}

#[test]
fn test_counts_match_level_size() {
    let pool = ['a', 'b', 'c', 'd'];
    for k in 0..5 {
        let p = product(&pool, k);
        let expected = p.total().unwrap();
        assert_eq!(p.count() as u64, expected);

        let m = multisets(&pool, k);
        let expected = m.total().unwrap();
        assert_eq!(m.count() as u64, expected);
    }
}

#[test]
fn test_level_size_values() {
    assert_eq!(level_size(12, 3, Enumeration::Product), Some(1728));
    assert_eq!(level_size(12, 3, Enumeration::Multiset), Some(364));
    assert_eq!(level_size(12, 0, Enumeration::Multiset), Some(1));
    assert_eq!(level_size(0, 0, Enumeration::Product), Some(0));
    assert_eq!(level_size(12, 40, Enumeration::Product), None);
}

#[test]
fn test_multisets_are_sorted_products() {
    let pool = [0usize, 1, 2, 3];
    let from_product: Vec<Vec<usize>> = product(&pool, 3)
        .filter(|t| t.windows(2).all(|w| w[0] <= w[1]))
        .collect();
    let from_multisets: Vec<Vec<usize>> = multisets(&pool, 3).collect();
    assert_eq!(from_product, from_multisets);
}

#[test]
fn test_deep_tuple_spills_to_heap() {
    let pool = [7u8, 8];
    let mut combos = multisets(&pool, INLINE_DEPTH + 4);
    let first = combos.advance().map(<[usize]>::to_vec);
    assert_eq!(first, Some(vec![0; INLINE_DEPTH + 4]));
    assert_eq!(combos.count(), INLINE_DEPTH + 4);
}

#[test]
fn test_debug_format() {
    let pool = [1, 2];
    let debug = format!("{:?}", product(&pool, 3));
    assert!(debug.contains("Combinations"));
    assert!(debug.contains("Product"));
}

#[test]
fn test_accessors() {
    let pool = ['a', 'b', 'c'];
    let combos = Combinations::new(&pool, 4, Enumeration::Product);
    assert_eq!(combos.pool(), &pool);
    assert_eq!(combos.repeat(), 4);
    assert_eq!(combos.enumeration(), Enumeration::Product);

    let combos = multisets(&pool[..2], 2);
    assert_eq!(combos.pool(), &['a', 'b']);
    assert_eq!(combos.enumeration(), Enumeration::Multiset);
}
