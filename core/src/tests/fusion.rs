use crate::ndarray::Array2D;
use crate::prelude::*;

fn grid(size: [usize; 2], data: Vec<i64>) -> CircularContainer<Array2D<i64>, Dim2D> {
    CircularContainer::wrap(NdArray::from_flat_slice(NdVec(size), data))
}

#[test]
fn test_elementwise_add_stays_circular() {
    let a = grid([2, 2], vec![1, 2, 3, 4]);
    let b = grid([2, 2], vec![10, 20, 30, 40]);
    let sum: CircularContainer<Array2D<i64>, Dim2D> = &a + &b;
    for pos in sum.shape().positions() {
        let pos = pos.to_ivec();
        assert_eq!(a[pos] + b[pos], sum[pos]);
    }
    assert_eq!(44, sum[NdVec([-1, -1])]);
    assert_eq!(11, sum[NdVec([2, 6])]);
}

#[test]
fn test_map_stays_circular() {
    let a = grid([3, 1], vec![1, 2, 3]);
    let squares = a.map(|x| x * x).unwrap();
    assert_eq!(Ok(&9), squares.get(&NdVec([-1, 100])));
    assert_eq!(a.shape(), squares.shape());
}

#[test]
fn test_chained_operations() {
    let a = grid([2, 1], vec![6, 8]);
    let b = grid([2, 1], vec![2, 3]);
    let c = grid([1, 1], vec![1]);
    let result = &(&a / &b) - &c;
    assert_eq!(vec![2, 1], result.iter().copied().collect::<Vec<_>>());
}
