//! 座位分配算法
//!
//! 单遍贪心填充：考场按容量从大到小排列（容量相同时保持传入顺序），
//! 每个考场从 1 号座位开始连续分配，按报名顺序消费学生，
//! 直到学生或座位耗尽。剩余学生记为未分配。

/// 参与分配的考场
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSlot {
    pub room_id: i64,
    pub capacity: i32,
}

/// 一条座位分配
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatPlacement {
    pub room_id: i64,
    pub student_id: i64,
    pub seat_number: i32,
}

/// 分配方案
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatPlan {
    pub placements: Vec<SeatPlacement>,
    pub unseated: Vec<i64>,
}

impl SeatPlan {
    pub fn seated_count(&self) -> usize {
        self.placements.len()
    }

    pub fn unseated_count(&self) -> usize {
        self.unseated.len()
    }
}

/// 生成分配方案
///
/// `student_ids` 需按报名顺序给出。排序是稳定的，
/// 同容量考场的先后由调用方传入的顺序决定。
pub fn plan_seats(student_ids: &[i64], rooms: &[RoomSlot]) -> SeatPlan {
    let mut ordered = rooms.to_vec();
    ordered.sort_by(|a, b| b.capacity.cmp(&a.capacity));

    let mut placements = Vec::with_capacity(student_ids.len());
    let mut remaining = student_ids.iter().copied();
    let mut next = remaining.next();

    'rooms: for room in &ordered {
        for seat_number in 1..=room.capacity {
            let Some(student_id) = next else {
                break 'rooms;
            };
            placements.push(SeatPlacement {
                room_id: room.room_id,
                student_id,
                seat_number,
            });
            next = remaining.next();
        }
    }

    let unseated = next.into_iter().chain(remaining).collect();

    SeatPlan {
        placements,
        unseated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn room(room_id: i64, capacity: i32) -> RoomSlot {
        RoomSlot { room_id, capacity }
    }

    #[test]
    fn test_fills_largest_room_first() {
        let plan = plan_seats(&[1, 2, 3, 4], &[room(10, 2), room(20, 3)]);

        let layout: Vec<(i64, i64, i32)> = plan
            .placements
            .iter()
            .map(|p| (p.room_id, p.student_id, p.seat_number))
            .collect();
        assert_eq!(
            layout,
            vec![(20, 1, 1), (20, 2, 2), (20, 3, 3), (10, 4, 1)]
        );
        assert!(plan.unseated.is_empty());
    }

    #[test]
    fn test_reports_unseated_when_capacity_short() {
        let students: Vec<i64> = (1..=7).collect();
        let plan = plan_seats(&students, &[room(1, 2), room(2, 3)]);

        assert_eq!(plan.seated_count(), 5);
        assert_eq!(plan.unseated_count(), 2);
        assert_eq!(plan.unseated, vec![6, 7]);
    }

    #[test]
    fn test_seat_numbers_are_contiguous_per_room() {
        let students: Vec<i64> = (100..110).collect();
        let plan = plan_seats(&students, &[room(1, 4), room(2, 8), room(3, 1)]);

        for slot in [room(1, 4), room(2, 8), room(3, 1)] {
            let seats: Vec<i32> = plan
                .placements
                .iter()
                .filter(|p| p.room_id == slot.room_id)
                .map(|p| p.seat_number)
                .collect();
            let expected: Vec<i32> = (1..=seats.len() as i32).collect();
            assert_eq!(seats, expected);
            assert!(seats.len() as i32 <= slot.capacity);
        }

        let unique: HashSet<i64> = plan.placements.iter().map(|p| p.student_id).collect();
        assert_eq!(unique.len(), plan.placements.len());
    }

    #[test]
    fn test_equal_capacity_keeps_input_order() {
        let plan = plan_seats(&[1, 2, 3], &[room(7, 2), room(3, 2)]);

        assert_eq!(plan.placements[0].room_id, 7);
        assert_eq!(plan.placements[1].room_id, 7);
        assert_eq!(plan.placements[2].room_id, 3);
    }

    #[test]
    fn test_stops_at_first_room_when_students_run_out() {
        let plan = plan_seats(&[5], &[room(1, 30), room(2, 30)]);

        assert_eq!(plan.placements.len(), 1);
        assert_eq!(plan.placements[0].room_id, 1);
        assert_eq!(plan.placements[0].seat_number, 1);
    }

    #[test]
    fn test_no_rooms_leaves_everyone_unseated() {
        let plan = plan_seats(&[1, 2], &[]);
        assert!(plan.placements.is_empty());
        assert_eq!(plan.unseated, vec![1, 2]);
    }

    #[test]
    fn test_same_input_same_plan() {
        let students: Vec<i64> = (1..=9).collect();
        let rooms = [room(1, 3), room(2, 5), room(3, 3)];
        assert_eq!(plan_seats(&students, &rooms), plan_seats(&students, &rooms));
    }
}
