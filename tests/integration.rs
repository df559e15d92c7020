//! Integration tests for seatforge

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seatforge::grid::SAMPLE_SEEDS;
use seatforge::{
    assign_pass, export_clusters, find_best_k, load_points, load_seat_grid, run_kmeans,
    ConfigurationError, KMeans, KMeansError, Membership, PointPool, Seat, SeatGrid,
};
use std::collections::BTreeMap;
use std::io::Write;
use tempfile::NamedTempFile;

/// Write a seat CSV where the front half of the cabin is cool and quiet
/// and the back half is warm and loud
fn create_cabin_csv(grid: SeatGrid, seed: u64) -> NamedTempFile {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "temperature,noise,").unwrap();
    for row in 1..=grid.rows {
        for _aisle in 1..=grid.aisles {
            let (temperature, noise) = if row <= grid.rows / 2 {
                (20.0, 40.0)
            } else {
                (26.0, 70.0)
            };
            writeln!(
                file,
                "{:.3},{:.3},",
                temperature + rng.gen_range(-0.5..0.5),
                noise + rng.gen_range(-1.0..1.0)
            )
            .unwrap();
        }
    }
    file
}

fn record(x: f64, y: f64) -> BTreeMap<String, f64> {
    BTreeMap::from([("x".to_string(), x), ("y".to_string(), y)])
}

#[test]
fn test_end_to_end_pipeline() {
    let grid = SeatGrid::new(8, 4);
    let input = create_cabin_csv(grid, 1);

    let mut pool = load_seat_grid(input.path(), grid).unwrap();
    assert_eq!(pool.len(), 32);
    assert_eq!(pool.attributes(), &["temperature".to_string(), "noise".to_string()]);

    let seeds = grid.indices(&[Seat::new(1, 1), Seat::new(8, 4)]).unwrap();
    let clustering = KMeans::new(2).with_seeds(seeds).fit(&mut pool).unwrap();
    assert!(clustering.converged);
    assert_eq!(clustering.cluster_sizes(), vec![16, 16]);

    // front rows in cluster 0, back rows in cluster 1
    for index in 0..pool.len() {
        let seat = grid.seat(index).unwrap();
        let expected = if seat.row <= 4 { 0 } else { 1 };
        assert_eq!(pool.cluster_id(index), Some(expected), "seat {}", seat);
    }

    let output = NamedTempFile::new().unwrap();
    export_clusters(output.path(), &pool).unwrap();
    let written = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(written.lines().next(), Some("temperature,noise,cid"));
    assert_eq!(written.lines().count(), 33);
}

#[test]
fn test_full_cabin_with_sample_seeds() {
    let grid = SeatGrid::default();
    let input = create_cabin_csv(grid, 2);
    let mut pool = load_seat_grid(input.path(), grid).unwrap();
    assert_eq!(pool.len(), 510);

    let seeds = grid.indices(&SAMPLE_SEEDS).unwrap();
    let clustering = KMeans::new(9)
        .with_seeds(seeds)
        .with_rng_seed(17)
        .fit(&mut pool)
        .unwrap();

    assert_eq!(clustering.n_clusters(), 9);
    assert!(clustering.best_sse >= 0.0);
    assert!(pool
        .assignments()
        .iter()
        .all(|a| matches!(a, Some(id) if *id < 9)));
    assert_eq!(clustering.cluster_sizes().iter().sum::<usize>(), 510);
}

#[test]
fn test_four_point_scenario_from_records() {
    let records = vec![
        record(0.0, 0.0),
        record(0.0, 1.0),
        record(10.0, 10.0),
        record(10.0, 11.0),
    ];
    let attributes = vec!["x".to_string(), "y".to_string()];
    let mut pool = PointPool::from_records(attributes, &records).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut clustering = run_kmeans(2, &mut pool, &[0, 2], &mut rng).unwrap();

    assert_eq!(clustering.clusters[0].members(), &[0, 1]);
    assert_eq!(clustering.clusters[1].members(), &[2, 3]);
    assert_eq!(clustering.clusters[0].centroid().to_vec(), vec![0.0, 0.5]);
    assert_eq!(clustering.clusters[1].centroid().to_vec(), vec![10.0, 10.5]);
    assert!((clustering.best_sse - 1.0).abs() < 1e-12);

    let admissions = assign_pass(&mut clustering.clusters, &mut pool, Membership::Exclusive);
    assert_eq!(admissions, 0);
}

#[test]
fn test_malformed_records_are_rejected() {
    let mut bad = record(1.0, 2.0);
    bad.remove("y");
    let records = vec![record(0.0, 0.0), bad];
    assert!(PointPool::from_records(vec!["x".to_string(), "y".to_string()], &records).is_err());

    let records = vec![record(0.0, f64::INFINITY)];
    assert!(PointPool::from_records(vec!["x".to_string(), "y".to_string()], &records).is_err());
}

#[test]
fn test_best_k_sweep() {
    let grid = SeatGrid::new(6, 2);
    let input = create_cabin_csv(grid, 3);
    let mut pool = load_seat_grid(input.path(), grid).unwrap();

    let base = KMeans::new(2)
        .with_seeds(grid.indices(&[Seat::new(1, 1), Seat::new(6, 2)]).unwrap())
        .with_rng_seed(5);
    let sweep = find_best_k(&mut pool, 2..=5, &base).unwrap();

    assert_eq!(sweep.table.len(), 4);
    let lowest = sweep
        .table
        .iter()
        .map(|&(_, sse)| sse)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(sweep.best_sse, lowest);
    assert!((2..=5).contains(&sweep.best_k));
}

#[test]
fn test_error_handling_invalid_clusters() {
    let grid = SeatGrid::new(2, 2);
    let input = create_cabin_csv(grid, 4);
    let mut pool = load_seat_grid(input.path(), grid).unwrap();

    let result = KMeans::new(0).fit(&mut pool);
    assert!(matches!(
        result,
        Err(KMeansError::Configuration(ConfigurationError::InvalidClusterCount { .. }))
    ));

    let result = KMeans::new(5).fit(&mut pool);
    assert!(matches!(
        result,
        Err(KMeansError::Configuration(ConfigurationError::InvalidClusterCount { .. }))
    ));
}

#[test]
fn test_exported_file_reloads() {
    let grid = SeatGrid::new(3, 3);
    let input = create_cabin_csv(grid, 6);
    let mut pool = load_seat_grid(input.path(), grid).unwrap();
    KMeans::new(3).with_rng_seed(11).fit(&mut pool).unwrap();

    let output = NamedTempFile::new().unwrap();
    export_clusters(output.path(), &pool).unwrap();
    let reloaded = load_points(output.path()).unwrap();

    assert_eq!(reloaded.attributes(), pool.attributes());
    assert_eq!(reloaded.len(), pool.len());
    assert!(reloaded.assignments().iter().all(Option::is_none));
}
