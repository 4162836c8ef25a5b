use std::cmp::Ordering;

/// elements present in both sorted slices
pub fn intersect_sorted<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = vec![];
    let mut ai = 0;
    let mut bi = 0;
    while ai < a.len() && bi < b.len() {
        match Ord::cmp(&a[ai], &b[bi]) {
            Ordering::Equal =>  {
                out.push(a[ai].clone());
                ai += 1;
                bi += 1;
            }
            Ordering::Less => {
                ai += 1;
            }
            Ordering::Greater => {
                bi += 1;
            }
        }
    }
    return out;
}

/// a - b for sorted slices, result stays sorted
pub fn setminus_sorted<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = vec![];
    let mut bi = 0;
    for x in a {
        while bi < b.len() && b[bi] < *x {
            bi += 1;
        }
        if bi < b.len() && b[bi] == *x {
            continue;
        }
        out.push(x.clone());
    }
    return out;
}

/// fresh, empty directory below the system temp dir
#[cfg(test)]
pub(crate) fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("clique-bench-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_intersect() {
    let a = [1,2,        5,8,9];
    let b = [0,2,2,2,3,4,5,  9,9,9];
    assert_eq!(intersect_sorted(&a, &b), vec![2,5,9]);
    assert_eq!(intersect_sorted(&b, &a), vec![2,5,9]);

    let a: [u32; 0] = [];
    assert_eq!(intersect_sorted(&a, &b), vec![]);

    assert_eq!(intersect_sorted(&[2], &[3]), vec![]);
    assert_eq!(intersect_sorted(&[0], &[0,1,2,3,4,5]), vec![0]);
    assert_eq!(intersect_sorted(&[5], &[0,1,2,3,4,5]), vec![5]);
}

#[test]
fn test_setminus() {
    assert_eq!(setminus_sorted(&[1,2,3,4,5], &[2,4]), vec![1,3,5]);
    assert_eq!(setminus_sorted(&[1,2,3], &[0,7]), vec![1,2,3]);
    assert_eq!(setminus_sorted(&[1,2,3], &[1,2,3]), vec![]);
    let empty: [u32; 0] = [];
    assert_eq!(setminus_sorted(&empty, &[1]), vec![]);
    assert_eq!(setminus_sorted(&[4,9], &empty), vec![4,9]);
}
